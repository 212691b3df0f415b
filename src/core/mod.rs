//! Core deterministic primitives.
//!
//! Pure integer arithmetic shared by every rotation: the 48-bit seeded
//! generator and the runedate calendar.

pub mod calendar;
pub mod rng;

// Re-export core types
pub use calendar::{runedate, RuneDate, Timestamp, WeeklyAnchor, RUNEDATE_EPOCH};
pub use rng::{next_bounded_int, Seed};
