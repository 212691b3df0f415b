//! Seeded 48-bit Linear Congruential Generator
//!
//! Bit-compatible with the JDK `java.util.Random` step the game server
//! uses when it rolls its daily rotations. Every call reseeds from a
//! caller-supplied value; there is no running generator state.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::error::{AlmanacError, AlmanacResult};

/// LCG multiplier (also the seed scrambler).
pub const MULTIPLIER: u64 = 0x5_DEEC_E66D;

/// LCG increment.
pub const INCREMENT: u64 = 0xB;

/// Width of the generator state in bits.
pub const SEED_BITS: u32 = 48;

/// Mask reducing a value modulo 2^48.
pub const SEED_MASK: u64 = (1 << SEED_BITS) - 1;

/// Bits discarded from the state when producing output.
const OUTPUT_SHIFT: u32 = 17;

const LIMB_BITS: u32 = 16;
const LIMB_MASK: u64 = (1 << LIMB_BITS) - 1;

/// `MULTIPLIER` split into 16-bit limbs, least significant first.
const MULTIPLIER_LIMBS: [u64; 3] = [0xE66D, 0xDEEC, 0x0005];

/// A 48-bit generator seed.
///
/// Construction always reduces modulo 2^48, so a `Seed` can never carry
/// bits the generator would not see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u64")]
pub struct Seed(u64);

impl Seed {
    /// Create a seed from an unsigned value, keeping the low 48 bits.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw & SEED_MASK)
    }

    /// Create a seed from a signed value using two's-complement wrapping.
    #[inline]
    pub const fn from_signed(raw: i64) -> Self {
        Self::new(raw as u64)
    }

    /// Raw 48-bit value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Seed {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

/// Draw a bounded integer from `seed`.
///
/// Scrambles the seed, advances the generator `repeats` times, drops the
/// low 17 bits and reduces modulo `bound`.
///
/// # Errors
///
/// Returns [`AlmanacError::InvalidBound`] when `bound <= 0`.
///
/// # Example
///
/// ```
/// use rune_almanac::core::rng::{next_bounded_int, Seed};
///
/// // Same as `new java.util.Random(0).nextInt(10)`.
/// assert_eq!(next_bounded_int(Seed::new(0), 10, 1), Ok(0));
/// assert!(next_bounded_int(Seed::new(0), 0, 1).is_err());
/// ```
pub fn next_bounded_int(seed: Seed, bound: i64, repeats: u32) -> AlmanacResult<u64> {
    let checked = u64::try_from(bound)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or(AlmanacError::InvalidBound { bound })?;
    Ok(bounded(seed, checked, repeats))
}

/// Infallible draw for callers whose bound is known to be positive.
#[inline]
pub fn bounded(seed: Seed, bound: NonZeroU64, repeats: u32) -> u64 {
    let mut state = scramble(seed);
    for _ in 0..repeats {
        state = step(state);
    }
    (state >> OUTPUT_SHIFT) % bound.get()
}

/// Initial state: seed XOR multiplier, modulo 2^48.
#[inline]
fn scramble(seed: Seed) -> u64 {
    (seed.value() ^ MULTIPLIER) & SEED_MASK
}

/// One generator step: `(state * MULTIPLIER + INCREMENT) mod 2^48`.
///
/// Schoolbook multiplication over three 16-bit limbs. Every partial sum
/// stays below 2^35, so nothing here can overflow a u64.
#[inline]
pub(crate) fn step(state: u64) -> u64 {
    let s0 = state & LIMB_MASK;
    let s1 = (state >> LIMB_BITS) & LIMB_MASK;
    let s2 = (state >> (2 * LIMB_BITS)) & LIMB_MASK;
    let [m0, m1, m2] = MULTIPLIER_LIMBS;

    let r0 = s0 * m0 + INCREMENT;
    let carry = r0 >> LIMB_BITS;

    let r1 = s1 * m0 + s0 * m1 + carry;
    let carry = r1 >> LIMB_BITS;

    // Anything above the third limb falls outside 48 bits.
    let r2 = s2 * m0 + s1 * m1 + s0 * m2 + carry;

    ((r2 & LIMB_MASK) << (2 * LIMB_BITS)) | ((r1 & LIMB_MASK) << LIMB_BITS) | (r0 & LIMB_MASK)
}

// =============================================================================
// TESTS
// =============================================================================
