// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the central game server actor. Used to share state
//! between HTTP/WebSocket handlers and the actor system.

use actix::Addr;
use crate::server::game_server::GameServer;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the game server actor (matchmaking, matches, sessions).
    pub game_server_addr: Addr<GameServer>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(game_server_addr: Addr<GameServer>) -> Self {
        AppState { game_server_addr }
    }
}
