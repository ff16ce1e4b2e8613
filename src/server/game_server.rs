/// Central game server actor.
///
/// Owns the session directory (participant identity -> outbound channel), the
/// matchmaking queue, and the match registry. Every state mutation happens
/// inside this actor's mailbox, which serializes moves on any given match.

use actix::prelude::*;
use std::collections::HashMap;
use log::{info, debug};
use uuid::Uuid;

use crate::server::matchmaking::MatchmakingQueue;
use crate::server::messages::ServerWsMessage;
use crate::server::registry::MatchRegistry;
use crate::server::types::PlayerId;

/// Message: a connection asked to enter matchmaking.
#[derive(Message)]
#[rtype(result = "()")]
pub struct SearchMatch {
    pub addr: Recipient<ServerWsMessage>,
}

/// Message: a participant attempts a move.
#[derive(Message)]
#[rtype(result = "()")]
pub struct PlayerMove {
    pub player_id: PlayerId,
    pub row: i32,
    pub col: i32,
}

/// Main game server actor.
pub struct GameServer {
    /// Session directory: one outbound channel per minted identity. Entries
    /// are never pruned in the current scope.
    sessions: HashMap<PlayerId, Recipient<ServerWsMessage>>,
    /// Participants waiting to be paired.
    queue: MatchmakingQueue,
    /// Active matches.
    registry: MatchRegistry,
}

impl GameServer {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            queue: MatchmakingQueue::new(),
            registry: MatchRegistry::new(),
        }
    }

    /// Sends a message to one participant's session. A missing or defunct
    /// session swallows the message; there is no retry.
    fn send_to_player(&self, player_id: &str, msg: ServerWsMessage) {
        if let Some(addr) = self.sessions.get(player_id) {
            addr.do_send(msg);
        }
    }

    fn mint_player_id() -> PlayerId {
        format!("user-{}", Uuid::new_v4())
    }
}

impl Default for GameServer {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for GameServer {
    type Context = Context<Self>;
}

impl Handler<SearchMatch> for GameServer {
    type Result = ();

    /// Mints a fresh identity for the connection, registers its outbound
    /// channel, confirms with Searching, and enqueues it. Every pair the
    /// queue forms becomes a match, and both participants receive Start.
    fn handle(&mut self, msg: SearchMatch, _ctx: &mut Self::Context) -> Self::Result {
        let player_id = Self::mint_player_id();
        self.sessions.insert(player_id.clone(), msg.addr);

        self.send_to_player(&player_id, ServerWsMessage::searching(player_id.clone()));
        debug!("[GameServer] Player {} searching for a match", player_id);

        for (first, second) in self.queue.enqueue(player_id) {
            self.registry.create_match(first.clone(), second.clone());
            info!("[GameServer] Players {} and {} paired", first, second);

            self.send_to_player(&first, ServerWsMessage::Start);
            self.send_to_player(&second, ServerWsMessage::Start);
        }
        debug!(
            "[GameServer] {} player(s) still waiting",
            self.queue.waiting_count()
        );
    }
}

impl Handler<PlayerMove> for GameServer {
    type Result = ();

    /// Forwards the move to the registry. Moves from participants with no
    /// active match are dropped. A rejected move earns the mover an
    /// InvalidAction; either way the mover receives an Update with the
    /// post-attempt snapshot. The opponent is not notified.
    fn handle(&mut self, msg: PlayerMove, _ctx: &mut Self::Context) -> Self::Result {
        let outcome = match self.registry.apply_move(&msg.player_id, msg.row, msg.col) {
            Some(outcome) => outcome,
            None => {
                debug!(
                    "[GameServer] Move from {} with no active match, dropped",
                    msg.player_id
                );
                return;
            }
        };

        if !outcome.accepted {
            debug!(
                "[GameServer] Invalid move by {} at ({}, {})",
                msg.player_id, msg.row, msg.col
            );
            self.send_to_player(&msg.player_id, ServerWsMessage::InvalidAction);
        }

        self.send_to_player(&msg.player_id, ServerWsMessage::update(outcome.snapshot));
    }
}
