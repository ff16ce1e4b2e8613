use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::game::types::BoardGrid;
use crate::server::types::PlayerId;

/// Payload of a client `Move` message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoveData {
    pub player_id: PlayerId,
    // Signed so that negative indices reach the board engine and come back as
    // InvalidAction instead of being rejected by the decoder.
    pub row: i32,
    pub col: i32,
}

/// Client -> server wire messages. Decoding is strict: a JSON value that does
/// not match one of these shapes exactly is dropped by the session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum ClientWsMessage {
    SearchMatch,
    Move(MoveData),
}

/// Post-move snapshot sent to the mover, computed after every move attempt
/// (accepted or not) from the mover's perspective.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoveSnapshot {
    pub board_state: BoardGrid,
    pub is_player_turn: bool,
    /// Omitted from the wire until the match is decided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_player_winner: Option<bool>,
}

// Message serveur -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "type", content = "data")]
pub enum ServerWsMessage {
    Start,
    InvalidAction,
    Update(MoveSnapshot),
    Searching {
        #[serde(rename = "userId")]
        user_id: PlayerId,
    },
}

impl ServerWsMessage {
    pub fn update(snapshot: MoveSnapshot) -> Self {
        Self::Update(snapshot)
    }
    pub fn searching(user_id: PlayerId) -> Self {
        Self::Searching { user_id }
    }
}
