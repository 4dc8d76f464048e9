use crate::deck::Deck;
use crate::hand::Hand;
use crate::rules::{DEALER_STAND_TOTAL, STARTING_CHIPS};
use crate::Card;
use std::fmt;

/// Anyone holding cards at the table.
pub trait Participant {
    fn name(&self) -> &str;

    fn hand(&self) -> &Hand;

    fn hand_mut(&mut self) -> &mut Hand;

    /// Draw one card from the shoe into this hand. Returns the card
    /// so callers can narrate the draw.
    fn hit(&mut self, deck: &mut Deck) -> Card {
        let card = deck.deal_card();
        self.hand_mut().add_card(card);
        card
    }

    fn total(&self) -> u8 {
        self.hand().total()
    }

    fn is_bust(&self) -> bool {
        self.hand().is_bust()
    }

    /// Clear per-round state ahead of the next deal.
    fn reset_hand(&mut self);
}

/// The human at the table: a name, a bankroll, and the active stake.
pub struct Player {
    name: String,
    chips: u64,
    bet: u64,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chips: STARTING_CHIPS,
            bet: 0,
            hand: Hand::new(),
        }
    }

    pub fn chips(&self) -> u64 {
        self.chips
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Stake `amount` on the coming round. A zero stake or one larger
    /// than the bankroll is refused and the bankroll is untouched.
    pub fn place_bet(&mut self, amount: u64) -> bool {
        if amount == 0 || amount > self.chips {
            return false;
        }
        self.chips -= amount;
        self.bet = amount;
        true
    }

    /// Even money: the stake comes back doubled.
    pub fn win_bet(&mut self) {
        self.chips += self.bet * 2;
    }

    /// Tie: the stake comes back, nothing gained or lost.
    pub fn push(&mut self) {
        self.chips += self.bet;
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn reset_hand(&mut self) {
        self.hand = Hand::new();
        self.bet = 0;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.hand)
    }
}

/// The house. No bankroll, a fixed name, and a hole card that stays
/// hidden until the dealer plays.
pub struct Dealer {
    hand: Hand,
    revealed: bool,
}

impl Dealer {
    pub fn new() -> Self {
        Self {
            hand: Hand::new(),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Table view of the dealer's cards. While the hole card (the first
    /// one dealt) is hidden it renders as "??" and no total is shown.
    pub fn show_hand(&self) -> String {
        if self.revealed {
            return self.hand.to_string();
        }
        let cards: Vec<String> = self
            .hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if i == 0 {
                    "??".to_string()
                } else {
                    card.to_string()
                }
            })
            .collect();
        cards.join(", ")
    }

    /// Reveal the hole card, then draw to the house rule: hit below 17,
    /// stand at 17 or more. Busting here is a normal outcome.
    pub fn play_hand(&mut self, deck: &mut Deck) {
        self.revealed = true;
        while self.hand.total() < DEALER_STAND_TOTAL {
            self.hit(deck);
        }
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        "Dealer"
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn reset_hand(&mut self) {
        self.hand = Hand::new();
        self.revealed = false;
    }
}
