use twentyone::{settle, Dealer, Deck, Participant, Player, RoundOutcome};

/// Everything on the table for one session: the shoe, the player,
/// and the dealer.
pub struct Table {
    pub deck: Deck,
    pub player: Player,
    pub dealer: Dealer,
}

impl Table {
    /// Open the table. A seed makes every shuffle of the session
    /// reproducible.
    pub fn new(name: &str, seed: Option<u64>) -> Self {
        let mut deck = match seed {
            Some(seed) => {
                log::info!("Shoe seeded with {seed}");
                Deck::seeded(seed)
            }
            None => {
                log::info!("Shoe shuffled from system entropy");
                Deck::new()
            }
        };
        deck.shuffle();
        Self {
            deck,
            player: Player::new(name),
            dealer: Dealer::new(),
        }
    }

    /// Opening deal: two cards each, alternating, player first. The
    /// dealer's first card stays face down.
    pub fn deal_initial(&mut self) {
        for _ in 0..2 {
            self.player.hit(&mut self.deck);
            self.dealer.hit(&mut self.deck);
        }
    }

    /// Dealer resolves its hand. Skipped when the player busted;
    /// the dealt hand then stands as-is, hole card and all.
    pub fn play_dealer(&mut self) {
        if self.player.is_bust() {
            return;
        }
        self.dealer.play_hand(&mut self.deck);
    }

    /// Compare hands and move the chips: a win pays even money, a push
    /// returns the stake, a loss was already collected at bet time.
    pub fn settle_bets(&mut self) -> RoundOutcome {
        let outcome = settle(self.player.hand(), self.dealer.hand());
        match outcome {
            RoundOutcome::Win => self.player.win_bet(),
            RoundOutcome::Push => self.player.push(),
            RoundOutcome::Loss => {}
        }
        outcome
    }

    /// Clear both hands ahead of the next deal.
    pub fn next_round(&mut self) {
        self.player.reset_hand();
        self.dealer.reset_hand();
    }
}

/// Parse a typed bet as a whole number of chips.
pub fn parse_bet(input: &str) -> Option<u64> {
    input.trim().parse().ok()
}
