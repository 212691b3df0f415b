//! Forecast Snapshot
//!
//! Everything the almanac can say about one instant, gathered into a
//! single serializable value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AlmanacConfig;
use crate::core::calendar::{runedate, RuneDate, Timestamp};
use crate::error::AlmanacResult;
use crate::rotation::flash::{flash_event_with, FlashEvent, FlashRuleSetId};
use crate::rotation::jewels::{jewel_for_runedate, Jewel};
use crate::rotation::merchant::{stock_for_runedate, Stock};
use crate::rotation::periodic::{guthixian_cache, raven, wilderness_warbands};

/// Rotations active at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    /// Instant forecast.
    pub at: Timestamp,
    /// Runedate containing `at`.
    pub runedate: RuneDate,
    /// Travelling merchant stock.
    pub stock: Stock,
    /// Open jewel door, if any.
    pub jewel: Option<Jewel>,
    /// Full-reward Guthixian Cache this hour.
    pub guthixian_cache: bool,
    /// Raven spawned in Prifddinas today.
    pub raven: bool,
    /// Wilderness Warbands camp this hour.
    pub wilderness_warbands: bool,
    /// Flash event this hour.
    pub flash_event: FlashEvent,
    /// Rule set the flash event was resolved against.
    pub flash_rule_set: FlashRuleSetId,
}

impl Forecast {
    /// Forecast every rotation at `at`.
    pub fn at(at: Timestamp, config: &AlmanacConfig) -> Self {
        let day = runedate(at);
        let rules = config.flash_rules.resolve(at);
        let forecast = Self {
            at,
            runedate: day,
            stock: stock_for_runedate(day),
            jewel: jewel_for_runedate(day),
            guthixian_cache: guthixian_cache(at),
            raven: raven(at),
            wilderness_warbands: wilderness_warbands(at),
            flash_event: flash_event_with(at, rules),
            flash_rule_set: rules.id,
        };
        debug!(%at, runedate = day.value(), "forecast built");
        forecast
    }

    /// Forecast at the current wall-clock instant.
    pub fn now(config: &AlmanacConfig) -> Self {
        Self::at(Timestamp::now(), config)
    }

    /// Forecasts at the start of each of the next `days` runedates, beginning
    /// with the runedate containing `from`.
    pub fn daily(from: Timestamp, days: u32, config: &AlmanacConfig) -> AlmanacResult<Vec<Self>> {
        let start = runedate(from).start();
        (0..i64::from(days))
            .map(|offset| -> AlmanacResult<Self> {
                let at = start.checked_add_days(offset)?;
                Ok(Self::at(at, config))
            })
            .collect()
    }
}
