//! Slot Resolution
//!
//! A slot is one independently rolled position in a daily rotation. Its
//! seed is derived from the runedate plus a small slot constant, and the
//! draw indexes a fixed, ordered table.

use std::num::{NonZeroU32, NonZeroU64};

use tracing::trace;

use crate::core::calendar::RuneDate;
use crate::core::rng::{bounded, Seed};

/// An ordered, non-empty table of named outcomes.
///
/// Order defines the index-to-item mapping and must match the game's.
#[derive(Debug)]
pub struct SlotTable<T: 'static> {
    items: &'static [T],
    bound: NonZeroU64,
}

impl<T: 'static> SlotTable<T> {
    /// Wrap a static table. Empty tables are rejected at compile time when
    /// used in a `const`.
    pub const fn new(items: &'static [T]) -> Self {
        let bound = match NonZeroU64::new(items.len() as u64) {
            Some(bound) => bound,
            None => panic!("slot table must not be empty"),
        };
        Self { items, bound }
    }

    /// Number of entries, used as the RNG bound.
    #[inline]
    pub const fn bound(&self) -> NonZeroU64 {
        self.bound
    }

    /// Entries in index order.
    #[inline]
    pub const fn items(&self) -> &'static [T] {
        self.items
    }

    /// Whether `item` appears in the table.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }
}

/// One rolled slot: its seed constant and its table.
#[derive(Debug)]
pub struct Slot<T: 'static> {
    /// Slot name for tracing.
    pub name: &'static str,
    /// Modulus folded into the seed (`runedate mod modulus`).
    pub modulus: NonZeroU32,
    /// Outcomes for this slot.
    pub table: SlotTable<T>,
}

impl<T: 'static> Slot<T> {
    /// Build a slot. A zero modulus is rejected at compile time when used
    /// in a `const`.
    pub const fn new(name: &'static str, modulus: u32, table: SlotTable<T>) -> Self {
        let modulus = match NonZeroU32::new(modulus) {
            Some(modulus) => modulus,
            None => panic!("slot modulus must not be zero"),
        };
        Self { name, modulus, table }
    }
}

/// Seed for a slot: `runedate * 2^32 + (runedate mod modulus)`, modulo 2^48.
///
/// Negative runedates wrap in two's complement and use the Euclidean
/// remainder, so the extra term is always in `0..modulus`. The game's own
/// truncating `%` would add a negative term instead, so results before
/// 2002-02-27 are an extrapolation of the rotation and not what the game
/// server would have rolled.
#[inline]
pub fn slot_seed(runedate: RuneDate, modulus: NonZeroU32) -> Seed {
    let day = runedate.value();
    let offset = day.rem_euclid(i64::from(modulus.get()));
    Seed::from_signed(day.wrapping_shl(32).wrapping_add(offset))
}

/// Seed for an election-style slot: `runedate * 2^32`, modulo 2^48.
#[inline]
pub fn election_seed(runedate: RuneDate) -> Seed {
    Seed::from_signed(runedate.value().wrapping_shl(32))
}

/// Draw the table index for `slot` on `runedate`.
#[inline]
pub fn slot_index<T: 'static>(runedate: RuneDate, slot: &Slot<T>) -> usize {
    let seed = slot_seed(runedate, slot.modulus);
    let index = bounded(seed, slot.table.bound(), 1);
    trace!(slot = slot.name, runedate = runedate.value(), seed = seed.value(), index, "slot rolled");
    // index < bound == items.len() <= usize::MAX
    index as usize
}

/// Resolve `slot` on `runedate` to its item.
#[inline]
pub fn resolve_slot<T: Copy + 'static>(runedate: RuneDate, slot: &Slot<T>) -> T {
    slot.table.items()[slot_index(runedate, slot)]
}

// =============================================================================
// TESTS
// =============================================================================
