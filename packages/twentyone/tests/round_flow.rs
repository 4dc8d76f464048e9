use twentyone::{settle, Card, Dealer, Deck, Participant, Player, Rank, RoundOutcome, Suit};

/// Opening deal: two cards each, alternating, player first.
fn deal_initial(deck: &mut Deck, player: &mut Player, dealer: &mut Dealer) {
    for _ in 0..2 {
        player.hit(deck);
        dealer.hit(deck);
    }
}

fn apply_outcome(player: &mut Player, outcome: RoundOutcome) {
    match outcome {
        RoundOutcome::Win => player.win_bet(),
        RoundOutcome::Push => player.push(),
        RoundOutcome::Loss => {} // stake was already taken at place_bet
    }
}

#[test]
fn test_full_round_settles_the_bankroll() {
    let mut deck = Deck::seeded(3);
    deck.shuffle();
    let mut player = Player::new("Ada");
    let mut dealer = Dealer::new();

    assert!(player.place_bet(100));
    assert_eq!(player.chips(), 900);

    deal_initial(&mut deck, &mut player, &mut dealer);
    assert_eq!(player.hand().len(), 2);
    assert_eq!(dealer.hand().len(), 2);
    assert_eq!(deck.len(), 48);

    // Player stands on the opening hand; two cards can never bust.
    assert!(!player.is_bust());
    dealer.play_hand(&mut deck);
    assert!(dealer.total() >= 17);

    let outcome = settle(player.hand(), dealer.hand());
    apply_outcome(&mut player, outcome);

    match outcome {
        RoundOutcome::Win => {
            assert_eq!(player.chips(), 1100);
            assert!(dealer.is_bust() || player.total() > dealer.total());
        }
        RoundOutcome::Loss => {
            assert_eq!(player.chips(), 900);
            assert!(player.total() < dealer.total());
        }
        RoundOutcome::Push => {
            assert_eq!(player.chips(), 1000);
            assert_eq!(player.total(), dealer.total());
        }
    }
}

#[test]
fn test_dealer_policy_holds_for_many_shuffles() {
    for seed in 0..20 {
        let mut deck = Deck::seeded(seed);
        deck.shuffle();
        let mut dealer = Dealer::new();
        dealer.hit(&mut deck);
        dealer.hit(&mut deck);
        dealer.play_hand(&mut deck);
        assert!(dealer.total() >= 17, "seed {seed} stopped short of 17");
        assert!(dealer.is_revealed());
    }
}

#[test]
fn test_opening_totals_are_plausible() {
    let mut deck = Deck::seeded(11);
    deck.shuffle();
    let mut player = Player::new("Ada");
    let mut dealer = Dealer::new();
    deal_initial(&mut deck, &mut player, &mut dealer);
    // Two cards land between 2+2 and ace-ace, which demotes to 12.
    for total in [player.total(), dealer.total()] {
        assert!((4..=21).contains(&total), "opening total {total}");
    }
}

#[test]
fn test_busted_player_loses_without_a_dealer_turn() {
    // Unshuffled shoe deals from the canonical tail: A♣ K♣ Q♣ J♣ 10♣ 9♣...
    let mut deck = Deck::seeded(0);
    let mut player = Player::new("Ada");
    let mut dealer = Dealer::new();
    player.place_bet(250);
    deal_initial(&mut deck, &mut player, &mut dealer);
    assert_eq!(player.total(), 21); // A + Q
    assert_eq!(dealer.total(), 20); // K + J

    player.hit(&mut deck); // 10, ace demotes, still 21
    assert_eq!(player.total(), 21);
    player.hit(&mut deck); // 9 busts the hand at 30
    assert!(player.is_bust());

    // The dealer's turn is skipped entirely: no reveal, no draws.
    let outcome = settle(player.hand(), dealer.hand());
    assert_eq!(outcome, RoundOutcome::Loss);
    assert!(!dealer.is_revealed());
    assert_eq!(dealer.hand().len(), 2);

    apply_outcome(&mut player, outcome);
    assert_eq!(player.chips(), 750);
}

#[test]
fn test_push_keeps_the_bankroll_level() {
    let mut deck = Deck::seeded(0);
    let mut player = Player::new("Ada");
    let mut dealer = Dealer::new();
    player.place_bet(400);

    player.hand_mut().add_card(Card::new(Rank::King, Suit::Spades));
    player.hand_mut().add_card(Card::new(Rank::Eight, Suit::Hearts));
    dealer.hand_mut().add_card(Card::new(Rank::Nine, Suit::Clubs));
    dealer.hand_mut().add_card(Card::new(Rank::Nine, Suit::Diamonds));

    dealer.play_hand(&mut deck); // 18, stands without drawing
    assert_eq!(dealer.hand().len(), 2);

    let outcome = settle(player.hand(), dealer.hand());
    assert_eq!(outcome, RoundOutcome::Push);
    apply_outcome(&mut player, outcome);
    assert_eq!(player.chips(), 1000);
}

#[test]
fn test_rounds_reset_cleanly() {
    let mut deck = Deck::seeded(9);
    deck.shuffle();
    let mut player = Player::new("Ada");
    let mut dealer = Dealer::new();

    for _ in 0..5 {
        let before = player.chips();
        assert!(player.place_bet(50));
        deal_initial(&mut deck, &mut player, &mut dealer);

        if !player.is_bust() {
            dealer.play_hand(&mut deck);
        }
        let outcome = settle(player.hand(), dealer.hand());
        apply_outcome(&mut player, outcome);

        let delta = player.chips() as i64 - before as i64;
        assert!(
            [-50, 0, 50].contains(&delta),
            "round moved the bankroll by {delta}"
        );

        player.reset_hand();
        dealer.reset_hand();
        assert!(player.hand().is_empty());
        assert!(dealer.hand().is_empty());
        assert_eq!(player.bet(), 0);
        assert!(!dealer.is_revealed());
    }
}

#[test]
fn test_shoe_refills_mid_round() {
    let mut deck = Deck::seeded(5);
    deck.shuffle();
    while deck.len() > 2 {
        deck.deal_card();
    }

    let mut player = Player::new("Ada");
    let mut dealer = Dealer::new();
    player.place_bet(10);
    deal_initial(&mut deck, &mut player, &mut dealer);
    assert_eq!(player.hand().len(), 2);
    assert_eq!(dealer.hand().len(), 2);

    if !player.is_bust() {
        dealer.play_hand(&mut deck);
        assert!(dealer.total() >= 17);
    }
    // The round settles normally even though the shoe turned over.
    let outcome = settle(player.hand(), dealer.hand());
    apply_outcome(&mut player, outcome);
}
