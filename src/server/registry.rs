/// Match registry: owns every active match and maps participant identities to
/// the match they play in. All moves funnel through `apply_move`.

use std::collections::HashMap;
use log::debug;
use uuid::Uuid;

use crate::game::board::Board;
use crate::game::types::Player;
use crate::server::messages::MoveSnapshot;
use crate::server::types::PlayerId;

/// One active game pairing exactly two participants. The first registrant
/// plays `Player::One` and moves first.
struct Match {
    board: Board,
    first_player: PlayerId,
    second_player: PlayerId,
}

impl Match {
    fn role_of(&self, player_id: &str) -> Option<Player> {
        if self.first_player == player_id {
            Some(Player::One)
        } else if self.second_player == player_id {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Result of a move attempt by a participant with an active match.
pub struct MoveOutcome {
    /// False when the board rejected the move (no state changed).
    pub accepted: bool,
    /// Post-attempt snapshot from the mover's perspective, fresh either way.
    pub snapshot: MoveSnapshot,
}

/// Registry of active matches. Matches are never removed in the current
/// scope; entries live until process exit.
#[derive(Default)]
pub struct MatchRegistry {
    matches: HashMap<Uuid, Match>,
    player_to_match: HashMap<PlayerId, Uuid>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self {
            matches: HashMap::new(),
            player_to_match: HashMap::new(),
        }
    }

    /// Allocates a fresh match for a paired couple of participants and indexes
    /// both of them.
    pub fn create_match(&mut self, first_player: PlayerId, second_player: PlayerId) {
        let match_id = Uuid::new_v4();

        self.player_to_match.insert(first_player.clone(), match_id);
        self.player_to_match.insert(second_player.clone(), match_id);
        self.matches.insert(
            match_id,
            Match {
                board: Board::new(),
                first_player,
                second_player,
            },
        );

        debug!("[Registry] Match {} created", match_id);
    }

    /// Applies a move for `player_id`. Returns `None` when the participant has
    /// no active match (the caller drops the move silently). Otherwise the
    /// move is delegated to the board under the participant's role, and the
    /// outcome carries a post-attempt snapshot regardless of acceptance.
    pub fn apply_move(&mut self, player_id: &str, row: i32, col: i32) -> Option<MoveOutcome> {
        let match_id = *self.player_to_match.get(player_id)?;
        let game = self.matches.get_mut(&match_id)?;

        // The index guarantees membership; a mismatch would mean a stale
        // entry, treated like an unknown participant.
        let role = game.role_of(player_id)?;
        let accepted = game.board.attempt_move(role, row, col);

        if accepted {
            debug!(
                "[Registry] Match {} after move by {}:\n{}",
                match_id, player_id, game.board
            );
        }

        Some(MoveOutcome {
            accepted,
            snapshot: MoveSnapshot {
                board_state: game.board.board_state(),
                is_player_turn: game.board.is_player_turn(role),
                is_player_winner: game.board.winner().map(|winner| winner == role),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_match() -> MatchRegistry {
        let mut registry = MatchRegistry::new();
        registry.create_match("user-a".to_string(), "user-b".to_string());
        registry
    }

    #[test]
    fn test_move_without_match_is_absent() {
        let mut registry = MatchRegistry::new();
        assert!(registry.apply_move("user-ghost", 0, 0).is_none());
    }

    #[test]
    fn test_first_registrant_moves_first() {
        let mut registry = registry_with_match();

        let outcome = registry.apply_move("user-b", 0, 0).unwrap();
        assert!(!outcome.accepted);

        let outcome = registry.apply_move("user-a", 0, 0).unwrap();
        assert!(outcome.accepted);
        assert_eq!(outcome.snapshot.board_state[0][0], Some(Player::One));
    }

    #[test]
    fn test_rejected_move_still_yields_fresh_snapshot() {
        let mut registry = registry_with_match();
        registry.apply_move("user-a", 1, 1).unwrap();

        // Occupied cell: rejected, but the snapshot reflects current state.
        let outcome = registry.apply_move("user-b", 1, 1).unwrap();
        assert!(!outcome.accepted);
        assert_eq!(outcome.snapshot.board_state[1][1], Some(Player::One));
        assert!(outcome.snapshot.is_player_turn);
        assert_eq!(outcome.snapshot.is_player_winner, None);
    }

    #[test]
    fn test_snapshot_turn_is_from_mover_perspective() {
        let mut registry = registry_with_match();

        let outcome = registry.apply_move("user-a", 0, 0).unwrap();
        assert!(!outcome.snapshot.is_player_turn);

        let outcome = registry.apply_move("user-b", 1, 1).unwrap();
        assert!(!outcome.snapshot.is_player_turn);
    }

    #[test]
    fn test_winner_flag_absent_until_decided() {
        let mut registry = registry_with_match();

        // a: top row; b: middle row (one short).
        let moves = [
            ("user-a", 0, 0),
            ("user-b", 1, 0),
            ("user-a", 0, 1),
            ("user-b", 1, 1),
        ];
        for (player, row, col) in moves {
            let outcome = registry.apply_move(player, row, col).unwrap();
            assert!(outcome.accepted);
            assert_eq!(outcome.snapshot.is_player_winner, None);
        }

        let outcome = registry.apply_move("user-a", 0, 2).unwrap();
        assert!(outcome.accepted);
        assert_eq!(outcome.snapshot.is_player_winner, Some(true));

        // The loser's next attempt is rejected and reports the decided game.
        let outcome = registry.apply_move("user-b", 2, 2).unwrap();
        assert!(!outcome.accepted);
        assert_eq!(outcome.snapshot.is_player_winner, Some(false));
    }

    #[test]
    fn test_two_matches_are_isolated() {
        let mut registry = registry_with_match();
        registry.create_match("user-c".to_string(), "user-d".to_string());

        registry.apply_move("user-a", 0, 0).unwrap();
        let outcome = registry.apply_move("user-c", 0, 0).unwrap();
        assert!(outcome.accepted, "second match has its own empty board");
    }
}
