/// Centralized helpers for WebSocket error replies.
///
/// Use these helpers so the transport-level replies stay byte-identical across
/// call sites; the core itself never formats error payloads.

/// Reply sent when an inbound frame is not valid JSON. This is the transport's
/// own answer; the frame never reaches the game server.
pub fn invalid_message_reply() -> &'static str {
    r#"{"error":"invalid message"}"#
}

/// Reply sent when an outbound server message fails to serialize, right before
/// the session closes.
pub fn internal_error_reply() -> &'static str {
    r#"{"error":"internal server error"}"#
}
