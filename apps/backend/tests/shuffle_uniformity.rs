//! Statistical check that shuffles place every card at every position with
//! frequency close to 1/22.

use std::collections::HashMap;
use std::sync::Arc;

use unfoldfate::domain::shuffle::fisher_yates;
use unfoldfate::domain::{ReadingSession, DECK_SIZE};
use unfoldfate::test_support::fixture_deck;

const TRIALS: usize = 44_000;

/// Pearson chi-square over the 22x22 card/position table.
fn chi_square(counts: &[[usize; DECK_SIZE]; DECK_SIZE], trials: usize) -> f64 {
    let expected = trials as f64 / DECK_SIZE as f64;
    counts
        .iter()
        .flat_map(|row| row.iter())
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn session_shuffle_is_uniform_per_cell() {
    let deck = Arc::new(fixture_deck());
    let index_of: HashMap<String, usize> = deck
        .cards()
        .iter()
        .enumerate()
        .map(|(i, c)| (c.name.clone(), i))
        .collect();

    let mut session = ReadingSession::initialize_with_seed(Arc::clone(&deck), 2024);
    let mut counts = [[0usize; DECK_SIZE]; DECK_SIZE];

    for _ in 0..TRIALS {
        session.shuffle();
        for (position, card) in session.order().enumerate() {
            counts[index_of[&card.name]][position] += 1;
        }
    }

    // Each row and column sums to TRIALS by construction of a permutation.
    for card in 0..DECK_SIZE {
        assert_eq!(counts[card].iter().sum::<usize>(), TRIALS);
        assert_eq!(counts.iter().map(|row| row[card]).sum::<usize>(), TRIALS);
    }

    // (22-1)^2 = 441 degrees of freedom: mean 441, sd ~29.7. 600 is > 5 sd.
    let statistic = chi_square(&counts, TRIALS);
    assert!(statistic < 600.0, "chi-square {statistic} too large");

    // No cell strays more than 15% from the expected 2000.
    let expected = TRIALS as f64 / DECK_SIZE as f64;
    for row in &counts {
        for &observed in row {
            let ratio = observed as f64 / expected;
            assert!((0.85..1.15).contains(&ratio), "cell ratio {ratio} out of bounds");
        }
    }
}

#[test]
fn fisher_yates_small_slice_hits_every_permutation_evenly() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut seen: HashMap<[u8; 3], usize> = HashMap::new();
    let trials = 60_000;

    for _ in 0..trials {
        let mut items = [0u8, 1, 2];
        fisher_yates(&mut items, &mut rng);
        *seen.entry(items).or_insert(0) += 1;
    }

    assert_eq!(seen.len(), 6);
    for (perm, count) in seen {
        let ratio = count as f64 / (trials as f64 / 6.0);
        assert!((0.95..1.05).contains(&ratio), "{perm:?} ratio {ratio}");
    }
}
