//! Jewel Doors
//!
//! An election roll decides which of the two jewel doors opens on a
//! runedate. Three of the five outcomes open neither door.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::trace;

use crate::core::calendar::{runedate, runedates, RuneDate, Timestamp};
use crate::core::rng::bounded;
use crate::rotation::slot::election_seed;

/// Number of election outcomes.
pub const ELECTION_OUTCOMES: NonZeroU64 = match NonZeroU64::new(5) {
    Some(n) => n,
    None => panic!("election needs at least one outcome"),
};

/// A jewel behind one of the doors.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Jewel {
    /// Apmeken Amethyst.
    #[strum(serialize = "Apmeken Amethyst")]
    ApmekenAmethyst,
    /// Scabarite Crystal.
    #[strum(serialize = "Scabarite Crystal")]
    ScabariteCrystal,
}

impl Jewel {
    /// Map an election outcome to a jewel. Unlisted outcomes open no door.
    pub fn from_outcome(outcome: u64) -> Option<Self> {
        match outcome {
            0 => Some(Jewel::ScabariteCrystal),
            2 => Some(Jewel::ApmekenAmethyst),
            _ => None,
        }
    }
}

impl TryFrom<String> for Jewel {
    type Error = strum::ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Raw election outcome in `0..5` for `runedate`.
#[inline]
pub fn election_outcome(runedate: RuneDate) -> u64 {
    bounded(election_seed(runedate), ELECTION_OUTCOMES, 1)
}

/// Accessible jewel on `runedate`, if any.
pub fn jewel_for_runedate(runedate: RuneDate) -> Option<Jewel> {
    let outcome = election_outcome(runedate);
    trace!(runedate = runedate.value(), outcome, "jewel election");
    Jewel::from_outcome(outcome)
}

/// Accessible jewel at `timestamp`, if any.
pub fn jewel(timestamp: Timestamp) -> Option<Jewel> {
    jewel_for_runedate(runedate(timestamp))
}

/// Jewels for `days` consecutive runedates starting with the one containing `from`.
pub fn upcoming_jewels(from: Timestamp, days: u32) -> Vec<(RuneDate, Option<Jewel>)> {
    runedates(runedate(from), days)
        .map(|day| (day, jewel_for_runedate(day)))
        .collect()
}
