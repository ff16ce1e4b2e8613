/// Matchmaking configuration constants.
///
/// A match always pairs exactly two participants; the queue drains a pair as
/// soon as two players are waiting.
pub const PLAYERS_PER_MATCH: usize = 2;
