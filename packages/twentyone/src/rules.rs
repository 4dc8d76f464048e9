use crate::Hand;

/// Bankroll every player sits down with.
pub const STARTING_CHIPS: u64 = 1000;

/// The dealer draws until reaching this total, then stands.
pub const DEALER_STAND_TOTAL: u8 = 17;

/// Result of a settled round, seen from the player's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win,
    Loss,
    Push,
}

/// Compare two final hands and decide the round.
///
/// A busted player loses outright, even when the dealer busts too;
/// the player's bust is resolved first and the dealer never has to
/// play against it.
pub fn settle(player: &Hand, dealer: &Hand) -> RoundOutcome {
    if player.is_bust() {
        RoundOutcome::Loss
    } else if dealer.is_bust() || player.total() > dealer.total() {
        RoundOutcome::Win
    } else if player.total() < dealer.total() {
        RoundOutcome::Loss
    } else {
        RoundOutcome::Push
    }
}
