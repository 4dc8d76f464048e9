mod card;
mod deck;
mod hand;
mod participant;
mod rules;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::Hand;
pub use participant::{Dealer, Participant, Player};
pub use rules::{settle, RoundOutcome, DEALER_STAND_TOTAL, STARTING_CHIPS};
