//! RNG oracle for the two random checks of a duel.
//!
//! Dodge rolls and prayer rolls are the only sources of randomness in turn
//! resolution. Both draw a uniform integer in `1..=10` through [`RngOracle`],
//! and every draw is keyed by a seed derived from the duel seed, the turn
//! number, the acting side and a per-turn roll counter.
//!
//! # Determinism
//!
//! Implementations must be pure functions of the seed. Resolving the same
//! turn twice with the same oracle yields identical rolls, which is what
//! makes turn resolution reproducible under test.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d10 (1-10 inclusive).
    fn roll_d10(&self, seed: u64) -> u32 {
        self.roll_die(seed, 10)
    }

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides.max(1)) + 1
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: each call performs one LCG step from the supplied seed and
/// permutes the result, so the oracle can be shared freely between duels.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Oracle that replays a fixed roll for every draw.
///
/// Useful for forcing dodge and prayer outcomes in tests and simulations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRoll(pub u32);

impl RngOracle for FixedRoll {
    fn next_u32(&self, _seed: u64) -> u32 {
        // roll_die adds one, so store the zero-based face.
        self.0.saturating_sub(1)
    }
}

/// Compute the seed for one roll inside a turn.
///
/// # Arguments
///
/// * `duel_seed` - Seed fixed at duel creation
/// * `turn` - Turn number being resolved
/// * `side` - Index of the acting side (0 or 1)
/// * `roll` - Counter of rolls already made this turn
pub fn compute_seed(duel_seed: u64, turn: u32, side: usize, roll: u32) -> u64 {
    let mut hash = duel_seed;

    hash ^= (turn as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (side as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (roll as u64).wrapping_mul(0x85ebca6b);

    // SplitMix64 finalizer
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
