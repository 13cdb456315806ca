//! Uniform winner selection for the lottery draw.
//!
//! Selection is a partial Fisher-Yates shuffle over pool indices: every
//! subset of size `k` is equally likely, with no ordering bias by join
//! time or entrant id. Fairness here is statistical, not cryptographic:
//! the draw is seeded from the thread RNG and is not reproducible by
//! entrants, which is all the product requires.

use rand::Rng;

/// Select `min(quota, pool_size)` distinct indices uniformly at random
/// from `0..pool_size`, without replacement.
///
/// The returned indices are in draw order. Callers map them back onto
/// their pool slice.
pub fn select_winners<R: Rng + ?Sized>(
    pool_size: usize,
    quota: usize,
    rng: &mut R,
) -> Vec<usize> {
    let k = quota.min(pool_size);
    let mut indices: Vec<usize> = (0..pool_size).collect();

    // Partial Fisher-Yates: after i swaps, indices[..=i] is a uniform
    // sample without replacement.
    for i in 0..k {
        let j = i + rng.random_range(0..pool_size - i);
        indices.swap(i, j);
    }

    indices.truncate(k);
    indices
}
