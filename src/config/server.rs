/// Server configuration constants.
///
/// Bind address and port for the HTTP server hosting the WebSocket endpoint.
pub const BIND_ADDR: &str = "127.0.0.1";

/// TCP port for the HTTP server.
pub const BIND_PORT: u16 = 4040;
