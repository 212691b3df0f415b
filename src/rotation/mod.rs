//! Rotation Resolvers
//!
//! Every daily and hourly rotation the almanac predicts. 100% deterministic:
//! each resolver is a pure function of a timestamp.
//!
//! ## Module Structure
//!
//! - `slot`: Seed derivation and table lookup for rolled slots
//! - `merchant`: Travelling merchant stock
//! - `jewels`: Jewel door election
//! - `periodic`: Guthixian Cache, raven, Wilderness Warbands
//! - `flash`: Versioned Wilderness Flash Event rotation
//! - `forecast`: Snapshot of all of the above

pub mod slot;
pub mod merchant;
pub mod jewels;
pub mod periodic;
pub mod flash;
pub mod forecast;

// Re-export key types
pub use merchant::{stock, Item, Stock};
pub use jewels::{jewel, Jewel};
pub use periodic::{guthixian_cache, raven, wilderness_warbands};
pub use flash::{flash_event, FlashEvent, FlashRuleSet, FlashRuleSetId};
pub use forecast::Forecast;
