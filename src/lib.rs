//! # Rune Almanac
//!
//! Offline prediction of RuneScape's rotating content, computed with the
//! same seeded arithmetic the game server uses.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       RUNE ALMANAC                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - 48-bit LCG (java.util.Random compatible)  │
//! │  └── calendar.rs - Runedates, elapsed hours, weekly anchors  │
//! │                                                              │
//! │  rotation/       - Resolvers (pure functions of time)        │
//! │  ├── slot.rs     - Seeded slot → table lookup                │
//! │  ├── merchant.rs - Travelling merchant stock                 │
//! │  ├── jewels.rs   - Jewel door election                       │
//! │  ├── periodic.rs - Caches, raven, warbands                   │
//! │  ├── flash.rs    - Versioned flash event rotation            │
//! │  └── forecast.rs - Combined snapshot                         │
//! │                                                              │
//! │  links.rs        - Player/clan page URLs                     │
//! │  config.rs       - Forecast options                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Nothing in `core/` or `rotation/` reads the clock, touches the network
//! or keeps state between calls. Give the same timestamp, get the same
//! answer. Only `Timestamp::now` and the `now` conveniences read the
//! wall clock.
//!
//! ## Example
//!
//! ```
//! use rune_almanac::{stock, jewel, Item, Jewel, Timestamp};
//!
//! let at = Timestamp::from_ymd_hms(2025, 1, 1, 12, 0, 0).unwrap();
//! assert_eq!(stock(at).slot1, Item::GiftForTheReaper);
//! assert_eq!(jewel(at), Some(Jewel::ScabariteCrystal));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod links;
pub mod rotation;

// Re-export commonly used types
pub use config::{AlmanacConfig, FlashRuleSelection};
pub use crate::core::calendar::{runedate, RuneDate, Timestamp};
pub use crate::core::rng::{next_bounded_int, Seed};
pub use error::{AlmanacError, AlmanacResult};
pub use rotation::{
    flash_event, guthixian_cache, jewel, raven, stock, wilderness_warbands, FlashEvent,
    FlashRuleSetId, Forecast, Item, Jewel, Stock,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
