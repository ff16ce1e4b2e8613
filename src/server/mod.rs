// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the main backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Matchmaking logic (FIFO pairing of waiting players)
//! - Match registry (active games, participant-to-match index)
//! - Protocol messages and the central game server actor

pub mod state;
pub mod router;
pub mod types;
pub mod messages;
pub mod matchmaking;
pub mod registry;
pub mod game_server;
pub mod session;
pub mod ws_error;
