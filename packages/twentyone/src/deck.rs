use crate::card::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// A single 52-card shoe with its own shuffling rng.
///
/// Running out of cards is not an error: dealing from an empty shoe
/// silently rebuilds the full deck and shuffles it before the draw.
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Fresh deck in canonical order, shuffled from OS entropy on demand.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Deterministic deck for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: full_deck(),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Remove and return the top card. An exhausted shoe is rebuilt and
    /// reshuffled first, so this never fails.
    pub fn deal_card(&mut self) -> Card {
        if let Some(card) = self.cards.pop() {
            return card;
        }
        self.cards = full_deck();
        self.shuffle();
        self.cards.pop().expect("a rebuilt deck holds 52 cards")
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(|c| c.to_display()).collect();
        write!(f, "{}", cards.join(", "))
    }
}

fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}
