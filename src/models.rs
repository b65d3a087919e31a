use serde::{Deserialize, Serialize};

/// Status string reported once the service considers itself initialized.
pub const STATUS_READY: &str = "ready";

/// Fixed name of this service payload.
pub const SERVICE_NAME: &str = "notes";

/// Readiness report returned by [`crate::service::start`].
///
/// Serializes to a two-key mapping: `{"status": "...", "service": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResponse {
    pub status: String,
    pub service: String,
}

impl StartResponse {
    /// The constant report: status [`STATUS_READY`], service [`SERVICE_NAME`].
    pub fn ready() -> Self {
        Self {
            status: STATUS_READY.to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}
