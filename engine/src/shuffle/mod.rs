//! Fisher–Yates shuffle
//!
//! Walks `i` from the last index down to 1, draws
//! `j = floor(rng() * (i + 1))` and swaps `i` with `j`. The caller's slice
//! is never touched; the permutation is built on an owned copy.

use crate::rng::RandomSource;

/// Return a shuffled copy of `items`
///
/// # Example
/// ```
/// use group_maker_core::{shuffle, SeededRng};
///
/// let names = vec!["Ann", "Bob", "Cam", "Dee", "Eve"];
/// let shuffled = shuffle(&names, &mut SeededRng::from_seed_str("x"));
/// assert_eq!(shuffled, vec!["Eve", "Dee", "Cam", "Ann", "Bob"]);
/// ```
pub fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut result = items.to_vec();
    for i in (1..result.len()).rev() {
        let j = pick_index(rng.next_f64(), i);
        result.swap(i, j);
    }
    result
}

/// `floor(draw * (upper + 1))`, clamped to `upper` for out-of-range draws
fn pick_index(draw: f64, upper: usize) -> usize {
    let scaled = (draw * (upper + 1) as f64).floor();
    if scaled <= 0.0 {
        0
    } else {
        (scaled as usize).min(upper)
    }
}
