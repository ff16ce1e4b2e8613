/// Matchmaking queue: FIFO pairing of participants waiting for an opponent.
///
/// Pairing is returned synchronously from `enqueue` rather than emitted as an
/// event; the game server consumes the pairs directly.

use std::collections::VecDeque;

use crate::config::matchmaking::PLAYERS_PER_MATCH;
use crate::server::types::PlayerId;

/// Ordered sequence of waiting participants. A participant appears at most
/// once: identities are minted fresh on every SearchMatch and leave the queue
/// permanently once paired.
#[derive(Debug, Default)]
pub struct MatchmakingQueue {
    waiting: VecDeque<PlayerId>,
}

impl MatchmakingQueue {
    pub fn new() -> Self {
        Self {
            waiting: VecDeque::new(),
        }
    }

    /// Appends the participant to the tail, then drains `(first, second)`
    /// pairs in arrival order while at least two participants are waiting.
    /// Returns the pairs formed by this call; usually zero or one, but the
    /// loop keeps the queue below pair size no matter how it got there.
    pub fn enqueue(&mut self, player_id: PlayerId) -> Vec<(PlayerId, PlayerId)> {
        self.waiting.push_back(player_id);

        let mut pairs = Vec::new();
        while self.waiting.len() >= PLAYERS_PER_MATCH {
            if let (Some(first), Some(second)) =
                (self.waiting.pop_front(), self.waiting.pop_front())
            {
                pairs.push((first, second));
            }
        }
        pairs
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }
}
