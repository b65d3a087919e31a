use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Opaque runtime context handed to the service entrypoint.
///
/// The entrypoint places no requirements on its shape, so it is carried as
/// raw JSON and never inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context(JsonValue);

impl Context {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// A context carrying no data. Same as `Context::default()`.
    pub fn empty() -> Self {
        Self(JsonValue::Null)
    }

    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }
}

impl From<JsonValue> for Context {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}
