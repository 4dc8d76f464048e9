use crate::Card;
use std::fmt;

/// Cards held by one participant, with a running blackjack total.
///
/// Every ace counts as 11 until that would push the hand over 21, then
/// aces are demoted to 1 one at a time. The total is therefore always
/// the best value the cards can make, and only exceeds 21 when no
/// demotion can save the hand.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
    soft_aces: u8,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft_aces: 0,
        }
    }

    /// Add one card and fold its points into the running total.
    pub fn add_card(&mut self, card: Card) {
        self.total += card.value();
        if card.is_ace() {
            self.soft_aces += 1;
        }
        self.cards.push(card);

        // Adjust for aces
        while self.total > 21 && self.soft_aces > 0 {
            self.total -= 10; // Count ace as 1 instead of 11
            self.soft_aces -= 1;
        }
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn is_bust(&self) -> bool {
        self.total > 21
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "{} (total {})", cards.join(", "), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn test_new_hand_is_empty() {
        let hand = Hand::new();
        assert!(hand.is_empty());
        assert_eq!(hand.total(), 0);
        assert!(!hand.is_bust());
    }

    #[test]
    fn test_total_simple() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::Two));
        hand.add_card(card(Rank::Three));
        assert_eq!(hand.total(), 5);
    }

    #[test]
    fn test_total_with_face_cards() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::King));
        hand.add_card(card(Rank::Queen));
        assert_eq!(hand.total(), 20);
    }

    #[test]
    fn test_ace_plus_king_is_twenty_one() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::Ace));
        hand.add_card(card(Rank::King));
        assert_eq!(hand.total(), 21);
        assert!(!hand.is_bust());
    }

    #[test]
    fn test_soft_ace() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::Ace));
        hand.add_card(card(Rank::Six));
        assert_eq!(hand.total(), 17); // Ace as 11
    }

    #[test]
    fn test_hard_ace() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::Ace));
        hand.add_card(card(Rank::Six));
        hand.add_card(card(Rank::Nine));
        assert_eq!(hand.total(), 16); // Ace as 1
    }

    #[test]
    fn test_multiple_aces() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
        hand.add_card(Card::new(Rank::Ace, Suit::Spades));
        hand.add_card(card(Rank::Nine));
        assert_eq!(hand.total(), 21); // One ace as 11, one as 1
    }

    #[test]
    fn test_two_aces_and_a_ten() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
        hand.add_card(Card::new(Rank::Ace, Suit::Spades));
        hand.add_card(card(Rank::Ten));
        assert_eq!(hand.total(), 12); // Both aces as 1
    }

    #[test]
    fn test_bust() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::King));
        hand.add_card(card(Rank::Queen));
        hand.add_card(card(Rank::Five));
        assert!(hand.is_bust());
        assert_eq!(hand.total(), 25);
    }

    #[test]
    fn test_not_bust_at_twenty_one() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::Seven));
        hand.add_card(card(Rank::Seven));
        hand.add_card(card(Rank::Seven));
        assert_eq!(hand.total(), 21);
        assert!(!hand.is_bust());
    }

    #[test]
    fn test_total_updates_after_every_card() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::Ace));
        assert_eq!(hand.total(), 11);
        hand.add_card(card(Rank::Nine));
        assert_eq!(hand.total(), 20);
        hand.add_card(card(Rank::Five));
        assert_eq!(hand.total(), 15); // Ace demoted on the way past 21
        hand.add_card(card(Rank::King));
        assert_eq!(hand.total(), 25);
        assert!(hand.is_bust());
    }

    #[test]
    fn test_display_lists_cards_and_total() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Rank::King, Suit::Hearts));
        hand.add_card(Card::new(Rank::Seven, Suit::Spades));
        assert_eq!(hand.to_string(), "King of Hearts, 7 of Spades (total 17)");
    }
}
