//! Server-to-client control events.

use serde::{Deserialize, Serialize};

/// Control messages sent outside the periodic snapshot stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ControlEvent {
    /// Acknowledgement sent once to a client when it is registered.
    /// Delivery is best-effort.
    ServerConnect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tagging() {
        let json = serde_json::to_string(&ControlEvent::ServerConnect).unwrap();
        assert_eq!(json, r#"{"event":"server_connect"}"#);
    }
}
