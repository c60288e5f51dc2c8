//! Property tests for the deck, card ranking and whole-match invariants.

mod common;

use std::collections::HashSet;

use proptest::prelude::*;
use truco_mineiro::cards::FIXED_TRUMPS;
use truco_mineiro::{
    resolve_trick, Card, Command, Deck, Game, GameRng, MatchConfig, PlayerId, Rank, Suit,
    TrickOutcome,
};

fn any_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len()).prop_map(|(s, r)| Card::new(Suit::ALL[s], Rank::ALL[r]))
}

proptest! {
    #[test]
    fn prop_shuffle_preserves_cards(seed in any::<u64>()) {
        let mut deck = Deck::build();
        deck.shuffle(&mut GameRng::new(seed));

        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(deck.len(), Deck::SIZE);
        prop_assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn prop_deal_is_disjoint(seed in any::<u64>()) {
        let mut deck = Deck::build();
        deck.shuffle(&mut GameRng::new(seed));
        let (a, b) = deck.deal(3).unwrap();

        prop_assert_eq!(a.len(), 3);
        prop_assert_eq!(b.len(), 3);
        prop_assert_eq!(deck.len(), 34);
        for card in a.iter().chain(&b) {
            prop_assert!(!deck.cards().contains(card));
        }
        prop_assert!(a.iter().all(|c| !b.contains(c)));
    }

    #[test]
    fn prop_trick_resolution_is_antisymmetric(a in any_card(), b in any_card()) {
        let forward = resolve_trick(&a, &b);
        let backward = resolve_trick(&b, &a);
        let expected = match forward {
            TrickOutcome::WinnerA => TrickOutcome::WinnerB,
            TrickOutcome::WinnerB => TrickOutcome::WinnerA,
            TrickOutcome::Tie => TrickOutcome::Tie,
        };
        prop_assert_eq!(backward, expected);
    }

    #[test]
    fn prop_trumps_beat_everything_else(a in any_card(), b in any_card()) {
        if a.is_trump() && !b.is_trump() {
            prop_assert_eq!(resolve_trick(&a, &b), TrickOutcome::WinnerA);
        }
        if a.is_trump() && b.is_trump() && a != b {
            prop_assert_ne!(resolve_trick(&a, &b), TrickOutcome::Tie);
        }
    }

    #[test]
    fn prop_ties_only_between_equal_plain_ranks(a in any_card(), b in any_card()) {
        let tied = resolve_trick(&a, &b) == TrickOutcome::Tie;
        let same_plain_rank = !a.is_trump() && !b.is_trump() && a.rank() == b.rank();
        prop_assert_eq!(tied, same_plain_rank || a == b);
    }

    /// Random legal play never breaks the table invariants.
    #[test]
    fn prop_legal_play_keeps_invariants(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..150),
    ) {
        common::init_logging();
        let config = MatchConfig::new().with_seed(seed);
        let mut game = Game::new(config).unwrap();

        for pick in picks {
            let legal: Vec<Command> = game
                .legal_commands()
                .into_iter()
                .filter(|c| *c != Command::ResetGame)
                .collect();
            if legal.is_empty() {
                break;
            }
            let before: u32 = game.players().iter().map(|(_, p)| p.score).sum();
            game.apply(*pick.get(&legal)).unwrap();

            let snap = game.snapshot();
            let after: u32 = snap.players.iter().map(|p| p.score).sum();
            prop_assert!(after >= before);
            prop_assert!(snap.table.len() < 2);
            prop_assert!(snap.hand.trick_count < 3);
            prop_assert!(snap.truco.value <= 12);

            let turn_holders = snap.players.iter().filter(|p| p.is_turn).count();
            prop_assert_eq!(turn_holders, 1);
            prop_assert!(snap.player(snap.hand.current_player).is_turn);
            prop_assert!(snap.players.iter().all(|p| !p.hand_revealed || p.is_turn));

            let held = snap.players.iter().map(|p| p.hand.len() + p.cards_played.len());
            prop_assert!(held.into_iter().all(|n| n == 3));
            prop_assert_eq!(snap.deck_remaining, 34);
        }
    }
}

#[test]
fn test_trump_order_is_fixed() {
    let trumps: Vec<Card> = FIXED_TRUMPS
        .iter()
        .map(|&(suit, rank, _, _)| Card::new(suit, rank))
        .collect();
    for pair in trumps.windows(2) {
        assert_eq!(resolve_trick(&pair[0], &pair[1]), TrickOutcome::WinnerA);
    }
    assert_eq!(trumps[0].trump_name(), Some("Zap"));
    assert_eq!(Game::new(MatchConfig::new().with_seed(0)).unwrap().current_player(), PlayerId::FIRST);
}
