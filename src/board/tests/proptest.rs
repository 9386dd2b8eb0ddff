//! Property-based tests using proptest.

use super::random_playout;
use crate::board::{Game, Piece};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: undoing every applied move restores the starting state exactly
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let played = random_playout(&mut game, &mut rng, num_moves);
        prop_assert_eq!(game.history().len(), played);

        for _ in 0..played {
            prop_assert!(game.undo_move().is_ok());
        }
        prop_assert!(game.undo_move().is_err());
        prop_assert_eq!(game, Game::new());
    }

    /// Property: a single apply/undo pair is an exact inverse in any reachable position
    #[test]
    fn prop_each_move_undoes_exactly(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut game, &mut rng, num_moves);

        let snapshot = game.clone();
        for (from, to) in game.legal_plies() {
            let promotion = game.is_promotion_move(from, to).then_some(Piece::Knight);
            prop_assert!(game.apply_move(from, to, promotion).is_ok());
            prop_assert!(game.undo_move().is_ok());
            prop_assert_eq!(&game, &snapshot);
        }
    }

    /// Property: legal moves never leave the mover's king in check
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut game, &mut rng, num_moves);

        let mover = game.side_to_move();
        for (from, to) in game.legal_plies() {
            game.apply_move(from, to, None).unwrap();
            prop_assert!(!game.is_in_check(mover), "{}{} leaves {} in check", from, to, mover);
            game.undo_move().unwrap();
        }
    }

    /// Property: the turn flips on every accepted move and never on a rejected one
    #[test]
    fn prop_turn_alternates(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let mover = game.side_to_move();
            let plies = game.legal_plies();
            if plies.is_empty() {
                break;
            }
            let (from, to) = plies[rng.gen_range(0..plies.len())];

            game.apply_move(from, to, None).unwrap();
            prop_assert_eq!(game.side_to_move(), mover.opponent());

            // The same piece cannot move twice in a row.
            prop_assert!(game.apply_move(to, from, None).is_err());
            prop_assert_eq!(game.side_to_move(), mover.opponent());
        }
    }

    /// Property: every square in a legal destination list is also pseudo-legal
    #[test]
    fn prop_legal_subset_of_pseudo(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut game, &mut rng, num_moves);

        let own: Vec<_> = game.board().squares_of(game.side_to_move()).collect();
        for from in own {
            let pseudo = game.pseudo_destinations(from);
            for to in game.legal_destinations(from) {
                prop_assert!(pseudo.contains(to));
            }
        }
    }
}
