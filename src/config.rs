//! Forecast Configuration
//!
//! The resolvers themselves take no configuration. These knobs only shape
//! how the forecast snapshot and the CLI look ahead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::calendar::Timestamp;
use crate::error::AlmanacError;
use crate::rotation::flash::{rule_set, rule_set_for, FlashRuleSet, FlashRuleSetId};

/// How the flash event rule set is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashRuleSelection {
    /// Whichever rule set was in force at the instant.
    #[default]
    Automatic,
    /// Always the given rule set.
    Pinned(FlashRuleSetId),
}

impl FlashRuleSelection {
    /// Rule set to use at `timestamp`.
    pub fn resolve(self, timestamp: Timestamp) -> &'static FlashRuleSet {
        match self {
            FlashRuleSelection::Automatic => rule_set_for(timestamp),
            FlashRuleSelection::Pinned(id) => rule_set(id),
        }
    }
}

impl fmt::Display for FlashRuleSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashRuleSelection::Automatic => f.write_str("auto"),
            FlashRuleSelection::Pinned(id) => write!(f, "{id}"),
        }
    }
}

// `Pinned` carries a rule-set id, so parsing defers to the id's derived
// `FromStr` for every name other than `auto`.
impl FromStr for FlashRuleSelection {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") || s.eq_ignore_ascii_case("automatic") {
            return Ok(FlashRuleSelection::Automatic);
        }
        s.parse::<FlashRuleSetId>()
            .map(FlashRuleSelection::Pinned)
            .map_err(|_| AlmanacError::UnknownRuleSet(s.to_string()))
    }
}

/// Almanac configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmanacConfig {
    /// Flash event rule set selection.
    pub flash_rules: FlashRuleSelection,
    /// Days of merchant stock and jewels to list ahead.
    pub horizon_days: u32,
    /// Hours of flash events to list ahead.
    pub horizon_hours: u32,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            flash_rules: FlashRuleSelection::Automatic,
            horizon_days: 7,
            horizon_hours: 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AlmanacConfig::default();
        assert_eq!(config.flash_rules, FlashRuleSelection::Automatic);
        assert_eq!(config.horizon_days, 7);
        assert_eq!(config.horizon_hours, 14);
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("auto".parse::<FlashRuleSelection>().unwrap(), FlashRuleSelection::Automatic);
        assert_eq!(
            "legacy".parse::<FlashRuleSelection>().unwrap(),
            FlashRuleSelection::Pinned(FlashRuleSetId::Legacy)
        );
        assert_eq!(
            "Stryke_The_Wyrm".parse::<FlashRuleSelection>().unwrap(),
            FlashRuleSelection::Pinned(FlashRuleSetId::Stryke)
        );
        assert_eq!(
            "newest".parse::<FlashRuleSelection>(),
            Err(AlmanacError::UnknownRuleSet("newest".to_string()))
        );
    }

    #[test]
    fn test_selection_resolves() {
        let before_cutover = Timestamp::from_ymd_hms(2023, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(FlashRuleSelection::Automatic.resolve(before_cutover).id, FlashRuleSetId::Legacy);
        assert_eq!(
            FlashRuleSelection::Pinned(FlashRuleSetId::Stryke).resolve(before_cutover).id,
            FlashRuleSetId::Stryke
        );
    }

    #[test]
    fn test_selection_display_round_trips() {
        for selection in [
            FlashRuleSelection::Automatic,
            FlashRuleSelection::Pinned(FlashRuleSetId::Legacy),
            FlashRuleSelection::Pinned(FlashRuleSetId::Stryke),
        ] {
            assert_eq!(selection.to_string().parse::<FlashRuleSelection>().unwrap(), selection);
        }
    }
}
