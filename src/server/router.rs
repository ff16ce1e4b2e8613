//! HTTP and WebSocket routing configuration.
//!
//! Defines the single game socket endpoint. Any other path falls through to
//! the default 404 response.

use actix_web::web;
use crate::server::session::ws_game_socket;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/gameSocket")
            .to(ws_game_socket)
    );
}
