//! Fisher-Yates shuffle.

use rand::Rng;

/// Shuffle `items` in place.
///
/// Walks `i` from the last index down to 1 and swaps it with a uniformly
/// drawn `j` in `[0, i]`, so every permutation is equally likely given an
/// unbiased `rng`.
pub fn fisher_yates<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
