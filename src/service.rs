use tracing::debug;

use crate::context::Context;
use crate::models::{StartResponse, SERVICE_NAME};

/// Entrypoint for the notes app-service payload.
///
/// Accepts the runtime context without inspecting it; real initialization
/// (context validation, resource setup) would happen here. Always returns
/// the constant readiness report and cannot fail.
pub fn start(context: Context) -> StartResponse {
    let _ = context;
    debug!(service = SERVICE_NAME, "service reported ready");
    StartResponse::ready()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn start_with_empty_context_reports_ready() {
        let resp = start(Context::empty());
        assert_eq!(resp.status, "ready");
        assert_eq!(resp.service, "notes");
        assert_eq!(resp, StartResponse::ready());
    }

    #[test]
    fn start_ignores_context_contents() {
        let contexts = vec![
            json!(null),
            json!({}),
            json!({"deployment": "prod", "replicas": 3}),
            json!([1, 2, 3]),
            json!("not even an object"),
            json!({"nested": {"deeply": {"values": [true, false]}}}),
        ];
        for value in contexts {
            assert_eq!(start(Context::new(value)), StartResponse::ready());
        }
    }
}
