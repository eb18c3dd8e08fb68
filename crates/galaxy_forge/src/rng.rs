//! Deterministic 32-bit pseudo-random generation and sub-seed derivation.
//!
//! Every stochastic draw in this crate bottoms out in [`Mulberry32`], a
//! 32-bit-state generator whose advance and output mixing use only wrapping
//! integer arithmetic, and in [`rand01`], which maps one generator step to a
//! float in `[0, 1)`. The derived draws (`rand_range`, `weighted`, `normal`,
//! ...) are defined purely in terms of [`rand01`], so a fixed seed reproduces
//! an identical draw sequence on every platform.
//!
//! [`derive_seed`] creates independent sub-streams from a parent seed and a
//! salt; generation branches that must not perturb each other (star
//! components, belts, minor bodies, per-planet terrain) each own a generator
//! seeded this way.
use rand::RngCore;

/// Per-step additive state constant.
const STATE_INCREMENT: u32 = 0x6D2B_79F5;

/// Golden-ratio constant used for salt mixing in [`derive_seed`].
const GOLDEN_RATIO: u32 = 0x9E37_79B9;

/// Seeded generator with a 32-bit additive state step and xor-shift /
/// odd-multiply output mixing.
#[derive(Clone, Debug)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }
        let rem = chunks.into_remainder();
        if !rem.is_empty() {
            let bytes = self.next_u32().to_le_bytes();
            rem.copy_from_slice(&bytes[..rem.len()]);
        }
    }
}

/// Derive an independent 32-bit seed from a parent seed and a salt.
///
/// Pure function of `(seed, salt)`; distinct salts under the same parent
/// yield distinct, uncorrelated sub-streams.
#[inline]
pub fn derive_seed(seed: u32, salt: u32) -> u32 {
    seed ^ salt.wrapping_add(GOLDEN_RATIO)
}

/// Generate a random float in `[0, 1)` from one generator step.
#[inline]
pub fn rand01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.next_u32()) / 4_294_967_296.0
}

/// Uniform float in `[min, max)`.
#[inline]
pub fn rand_range<R: RngCore + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rand01(rng) * (max - min) + min
}

/// Uniform integer in the inclusive range `[min, max]`.
#[inline]
pub fn rand_int<R: RngCore + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    (rand01(rng) * f64::from(max - min + 1)).floor() as i32 + min
}

/// Bernoulli draw with probability `p`; always consumes one generator step.
#[inline]
pub fn chance<R: RngCore + ?Sized>(rng: &mut R, p: f64) -> bool {
    rand01(rng) < p
}

/// Pick one element uniformly. `items` must be non-empty.
#[inline]
pub fn pick<'a, R: RngCore + ?Sized, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    debug_assert!(!items.is_empty(), "pick requires a non-empty slice");
    &items[(rand01(rng) * items.len() as f64) as usize]
}

/// Pick one element proportionally to its weight. `items` must be non-empty.
pub fn weighted<'a, R: RngCore + ?Sized, T>(rng: &mut R, items: &'a [(T, f64)]) -> &'a T {
    debug_assert!(!items.is_empty(), "weighted requires a non-empty slice");
    let total: f64 = items.iter().map(|(_, w)| w).sum();
    let mut roll = rand01(rng) * total;
    for (item, weight) in items {
        roll -= weight;
        if roll <= 0.0 {
            return item;
        }
    }
    &items[items.len() - 1].0
}

/// Gaussian draw via the Box-Muller transform.
///
/// Consumes exactly two generator steps per call; the second Box-Muller
/// output is discarded so the draw sequence stays in lockstep with the
/// number of calls.
pub fn normal<R: RngCore + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    let u = 1.0 - rand01(rng);
    let v = 1.0 - rand01(rng);
    (-2.0 * u.ln()).sqrt() * (std::f64::consts::TAU * v).cos() * sd + mean
}
