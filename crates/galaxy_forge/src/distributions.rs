//! Numeric sampling primitives built on the seeded generator.
use rand::RngCore;

use crate::rng::rand01;

/// Linear interpolation between `a` and `b` by `t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Draw uniformly in log space over `[min, max]` and exponentiate.
///
/// Both bounds must be positive.
pub fn log_uniform<R: RngCore + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    debug_assert!(min > 0.0 && max >= min, "log_uniform needs 0 < min <= max");
    lerp(min.ln(), max.ln(), rand01(rng)).exp()
}

/// Poisson draw using Knuth's multiplicative algorithm.
///
/// Multiplies uniform draws until the running product drops below
/// `exp(-mean)`. For very large means the product underflows to zero before
/// the nominal count is reached, which bounds the result; callers keep means
/// in a sane range.
pub fn poisson<R: RngCore + ?Sized>(rng: &mut R, mean: f64) -> u32 {
    let limit = (-mean).exp();
    let mut count = 0u32;
    let mut product = 1.0;
    loop {
        count += 1;
        product *= rand01(rng);
        if product <= limit {
            break;
        }
    }
    count - 1
}

/// Choose `k` distinct indices uniformly from `[0, n)`.
///
/// Partial Fisher-Yates over the index range; the first `k` positions are
/// returned, so selections are uniform over k-subsets with no repeats.
/// `k` is capped at `n`.
pub fn choose_distinct_indices<R: RngCore + ?Sized>(
    rng: &mut R,
    n: usize,
    k: usize,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    let k = k.min(n);
    for i in 0..k {
        let j = i + (rand01(rng) * (n - i) as f64) as usize;
        indices.swap(i, j);
    }
    indices.truncate(k);
    indices
}
