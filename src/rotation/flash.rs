//! Wilderness Flash Events
//!
//! One flash event runs per hour, cycling through a fixed table from a
//! fixed epoch. Jagex has re-based the rotation at least once, so every
//! (epoch, table, modulus) triple is kept as a versioned [`FlashRuleSet`]
//! and an instant is resolved against the set in force at that instant.
//!
//! ## Rule sets
//!
//! | Id | In force from | Events |
//! |----|---------------|--------|
//! | `legacy` | 2022-10-17 11:00 UTC | 13 |
//! | `stryke` | 2024-02-05 07:00 UTC | 14 (Stryke the Wyrm at index 2) |
//!
//! A future re-base is a new entry appended to [`FLASH_RULE_SETS`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::{debug, trace};

use crate::config::FlashRuleSelection;
use crate::core::calendar::{elapsed_hours, Timestamp};
use crate::error::AlmanacResult;
use crate::rotation::slot::SlotTable;

/// A Wilderness Flash Event.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(into = "&'static str", try_from = "String")]
pub enum FlashEvent {
    /// Spider Swarm.
    #[strum(serialize = "Spider Swarm")]
    SpiderSwarm,
    /// Unnatural Outcrop.
    #[strum(serialize = "Unnatural Outcrop")]
    UnnaturalOutcrop,
    /// Stryke the Wyrm. Only in the `stryke` rule set.
    #[strum(serialize = "Stryke the Wyrm")]
    StrykeTheWyrm,
    /// Demon Stragglers.
    #[strum(serialize = "Demon Stragglers")]
    DemonStragglers,
    /// Butterfly Swarm.
    #[strum(serialize = "Butterfly Swarm")]
    ButterflySwarm,
    /// King Black Dragon Rampage.
    #[strum(serialize = "King Black Dragon Rampage")]
    KingBlackDragonRampage,
    /// Forgotten Soldiers.
    #[strum(serialize = "Forgotten Soldiers")]
    ForgottenSoldiers,
    /// Surprising Seedlings.
    #[strum(serialize = "Surprising Seedlings")]
    SurprisingSeedlings,
    /// Hellhound Pack.
    #[strum(serialize = "Hellhound Pack")]
    HellhoundPack,
    /// Infernal Star.
    #[strum(serialize = "Infernal Star")]
    InfernalStar,
    /// Lost Souls.
    #[strum(serialize = "Lost Souls")]
    LostSouls,
    /// Ramokee Incursion.
    #[strum(serialize = "Ramokee Incursion")]
    RamokeeIncursion,
    /// Displaced Energy.
    #[strum(serialize = "Displaced Energy")]
    DisplacedEnergy,
    /// Evil Bloodwood Tree.
    #[strum(serialize = "Evil Bloodwood Tree")]
    EvilBloodwoodTree,
}

impl TryFrom<String> for FlashEvent {
    type Error = strum::ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Identifier of a published flash event rule set.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(into = "&'static str", try_from = "String")]
pub enum FlashRuleSetId {
    /// Original 13-event rotation.
    Legacy,
    /// 14-event rotation with Stryke the Wyrm.
    #[strum(to_string = "stryke", serialize = "stryke_the_wyrm", serialize = "stryke-the-wyrm")]
    Stryke,
}

impl TryFrom<String> for FlashRuleSetId {
    type Error = strum::ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// One published version of the rotation: epoch, table and modulus.
#[derive(Debug)]
pub struct FlashRuleSet {
    /// Which version this is.
    pub id: FlashRuleSetId,
    /// Hour zero; also the instant this set takes over from its predecessor.
    pub epoch: Timestamp,
    /// Events in rotation order.
    pub events: SlotTable<FlashEvent>,
}

impl FlashRuleSet {
    /// Rotation length in hours.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.events.bound().get()
    }

    /// Position in the rotation at `timestamp`.
    #[inline]
    pub fn index_at(&self, timestamp: Timestamp) -> usize {
        // Result of rem_euclid lies in 0..modulus, which fits the table.
        elapsed_hours(timestamp, self.epoch).rem_euclid(self.modulus() as i64) as usize
    }

    /// Event running at `timestamp` under this rule set.
    #[inline]
    pub fn event_at(&self, timestamp: Timestamp) -> FlashEvent {
        self.events.items()[self.index_at(timestamp)]
    }
}

const LEGACY_EVENTS: &[FlashEvent] = &[
    FlashEvent::SpiderSwarm,
    FlashEvent::UnnaturalOutcrop,
    FlashEvent::DemonStragglers,
    FlashEvent::ButterflySwarm,
    FlashEvent::KingBlackDragonRampage,
    FlashEvent::ForgottenSoldiers,
    FlashEvent::SurprisingSeedlings,
    FlashEvent::HellhoundPack,
    FlashEvent::InfernalStar,
    FlashEvent::LostSouls,
    FlashEvent::RamokeeIncursion,
    FlashEvent::DisplacedEnergy,
    FlashEvent::EvilBloodwoodTree,
];

const STRYKE_EVENTS: &[FlashEvent] = &[
    FlashEvent::SpiderSwarm,
    FlashEvent::UnnaturalOutcrop,
    FlashEvent::StrykeTheWyrm,
    FlashEvent::DemonStragglers,
    FlashEvent::ButterflySwarm,
    FlashEvent::KingBlackDragonRampage,
    FlashEvent::ForgottenSoldiers,
    FlashEvent::SurprisingSeedlings,
    FlashEvent::HellhoundPack,
    FlashEvent::InfernalStar,
    FlashEvent::LostSouls,
    FlashEvent::RamokeeIncursion,
    FlashEvent::DisplacedEnergy,
    FlashEvent::EvilBloodwoodTree,
];

/// Every published rule set, oldest first.
///
/// Epochs must be strictly increasing.
pub static FLASH_RULE_SETS: [FlashRuleSet; 2] = [
    FlashRuleSet {
        id: FlashRuleSetId::Legacy,
        // 2022-10-17 11:00 UTC
        epoch: Timestamp::from_millis(1_666_004_400_000),
        events: SlotTable::new(LEGACY_EVENTS),
    },
    FlashRuleSet {
        id: FlashRuleSetId::Stryke,
        // 2024-02-05 07:00 UTC
        epoch: Timestamp::from_millis(1_707_116_400_000),
        events: SlotTable::new(STRYKE_EVENTS),
    },
];

/// The most recently published rule set.
pub fn latest_rule_set() -> &'static FlashRuleSet {
    &FLASH_RULE_SETS[FLASH_RULE_SETS.len() - 1]
}

/// Rule set with the given id.
///
/// Every id has exactly one entry in [`FLASH_RULE_SETS`]; a missing entry
/// would fall back to the latest set.
pub fn rule_set(id: FlashRuleSetId) -> &'static FlashRuleSet {
    FLASH_RULE_SETS
        .iter()
        .find(|rules| rules.id == id)
        .unwrap_or_else(latest_rule_set)
}

/// Rule set in force at `timestamp`.
///
/// Instants before the first epoch extrapolate the oldest set backwards.
pub fn rule_set_for(timestamp: Timestamp) -> &'static FlashRuleSet {
    let rules = FLASH_RULE_SETS
        .iter()
        .rev()
        .find(|rules| rules.epoch <= timestamp)
        .unwrap_or(&FLASH_RULE_SETS[0]);
    debug!(rule_set = %rules.id, %timestamp, "flash rule set selected");
    rules
}

/// Flash event at `timestamp` under the rule set in force then.
pub fn flash_event(timestamp: Timestamp) -> FlashEvent {
    flash_event_with(timestamp, rule_set_for(timestamp))
}

/// Flash event at `timestamp` under an explicit rule set.
pub fn flash_event_with(timestamp: Timestamp, rules: &FlashRuleSet) -> FlashEvent {
    let event = rules.event_at(timestamp);
    trace!(rule_set = %rules.id, %timestamp, %event, "flash event resolved");
    event
}

/// Events for `hours` consecutive hours starting with the hour containing
/// `from`, each resolved against the rule set `selection` gives for that hour.
///
/// With automatic selection the list crosses rule-set boundaries.
pub fn upcoming_flash_events(
    from: Timestamp,
    hours: u32,
    selection: FlashRuleSelection,
) -> AlmanacResult<Vec<(Timestamp, FlashEvent)>> {
    let start = from.floor_hour();
    (0..i64::from(hours))
        .map(|offset| -> AlmanacResult<(Timestamp, FlashEvent)> {
            let at = start.checked_add_hours(offset)?;
            Ok((at, flash_event_with(at, selection.resolve(at))))
        })
        .collect()
}

/// Start of the first hour at or after the hour containing `from` when
/// `event` runs under `selection`, searching at most `horizon_hours` hours.
pub fn next_flash_event(
    event: FlashEvent,
    from: Timestamp,
    horizon_hours: u32,
    selection: FlashRuleSelection,
) -> AlmanacResult<Option<Timestamp>> {
    let start = from.floor_hour();
    for offset in 0..i64::from(horizon_hours) {
        let at = start.checked_add_hours(offset)?;
        if flash_event_with(at, selection.resolve(at)) == event {
            return Ok(Some(at));
        }
    }
    Ok(None)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::MS_PER_HOUR;
    use strum::IntoEnumIterator;

    const AUTO: FlashRuleSelection = FlashRuleSelection::Automatic;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
        Timestamp::from_ymd_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn legacy() -> &'static FlashRuleSet {
        rule_set(FlashRuleSetId::Legacy)
    }

    fn stryke() -> &'static FlashRuleSet {
        rule_set(FlashRuleSetId::Stryke)
    }

    #[test]
    fn test_rule_set_constants() {
        assert_eq!(legacy().epoch, utc(2022, 10, 17, 11, 0));
        assert_eq!(stryke().epoch, utc(2024, 2, 5, 7, 0));
        assert_eq!(legacy().modulus(), 13);
        assert_eq!(stryke().modulus(), 14);
        assert_eq!(latest_rule_set().id, FlashRuleSetId::Stryke);
    }

    #[test]
    fn test_rule_sets_ordered_by_epoch() {
        for pair in FLASH_RULE_SETS.windows(2) {
            assert!(pair[0].epoch < pair[1].epoch);
        }
        for rules in &FLASH_RULE_SETS {
            assert_eq!(rule_set(rules.id).epoch, rules.epoch);
        }
    }

    #[test]
    fn test_every_id_has_one_rule_set() {
        for id in FlashRuleSetId::iter() {
            assert_eq!(FLASH_RULE_SETS.iter().filter(|rules| rules.id == id).count(), 1, "{id}");
            assert_eq!(rule_set(id).id, id);
        }
    }

    #[test]
    fn test_tables_differ_only_by_stryke() {
        let without: Vec<_> = stryke()
            .events
            .items()
            .iter()
            .copied()
            .filter(|e| *e != FlashEvent::StrykeTheWyrm)
            .collect();
        assert_eq!(without, legacy().events.items());
        assert!(!legacy().events.contains(&FlashEvent::StrykeTheWyrm));
    }

    #[test]
    fn test_legacy_rotation() {
        let epoch = legacy().epoch;
        assert_eq!(flash_event(epoch), FlashEvent::SpiderSwarm);
        assert_eq!(flash_event(epoch.checked_add_hours(1).unwrap()), FlashEvent::UnnaturalOutcrop);
        assert_eq!(flash_event(utc(2023, 1, 1, 0, 0)), FlashEvent::SurprisingSeedlings);
    }

    #[test]
    fn test_before_first_epoch_extrapolates_legacy() {
        let before = Timestamp::from_millis(legacy().epoch.as_millis() - 1);
        assert_eq!(rule_set_for(before).id, FlashRuleSetId::Legacy);
        assert_eq!(flash_event(before), FlashEvent::EvilBloodwoodTree);
    }

    #[test]
    fn test_cutover_boundary() {
        let cutover = stryke().epoch;
        let last_legacy_ms = Timestamp::from_millis(cutover.as_millis() - 1);

        assert_eq!(rule_set_for(last_legacy_ms).id, FlashRuleSetId::Legacy);
        assert_eq!(rule_set_for(cutover).id, FlashRuleSetId::Stryke);

        assert_eq!(flash_event(last_legacy_ms), FlashEvent::ForgottenSoldiers);
        assert_eq!(flash_event(cutover), FlashEvent::SpiderSwarm);
    }

    #[test]
    fn test_stryke_rotation() {
        let epoch = stryke().epoch;
        assert_eq!(flash_event(epoch.checked_add_hours(2).unwrap()), FlashEvent::StrykeTheWyrm);
        assert_eq!(flash_event(epoch.checked_add_hours(14).unwrap()), FlashEvent::SpiderSwarm);
        let late = Timestamp::from_millis(epoch.as_millis() + 15 * MS_PER_HOUR + 59 * 60_000);
        assert_eq!(flash_event(late), FlashEvent::UnnaturalOutcrop);
        assert_eq!(flash_event(utc(2025, 6, 1, 12, 0)), FlashEvent::InfernalStar);
    }

    #[test]
    fn test_pinned_rule_set_ignores_cutover() {
        let after = utc(2025, 6, 1, 12, 0);
        // 22993 hours after the legacy epoch; 22993 mod 13 = 9.
        assert_eq!(flash_event_with(after, legacy()), FlashEvent::LostSouls);
        assert_eq!(flash_event_with(after, stryke()), FlashEvent::InfernalStar);
    }

    #[test]
    fn test_upcoming_crosses_cutover() {
        let from = stryke().epoch.checked_add_hours(-2).unwrap();
        let hours = upcoming_flash_events(from, 4, AUTO).unwrap();
        let events: Vec<_> = hours.iter().map(|(_, e)| *e).collect();
        // Legacy hours 11418 and 11419, then stryke hours 0 and 1.
        assert_eq!(
            events,
            vec![
                FlashEvent::KingBlackDragonRampage,
                FlashEvent::ForgottenSoldiers,
                FlashEvent::SpiderSwarm,
                FlashEvent::UnnaturalOutcrop,
            ]
        );
        assert_eq!(hours[2].0, stryke().epoch);
    }

    #[test]
    fn test_upcoming_with_pinned_rule_set() {
        let at = utc(2025, 6, 1, 12, 0);
        let pinned = FlashRuleSelection::Pinned(FlashRuleSetId::Legacy);

        let auto = upcoming_flash_events(at, 2, AUTO).unwrap();
        let legacy_hours = upcoming_flash_events(at, 2, pinned).unwrap();
        assert_eq!(auto[0].1, FlashEvent::InfernalStar);
        assert_eq!(legacy_hours[0].1, FlashEvent::LostSouls);
        assert_eq!(legacy_hours[1].1, FlashEvent::RamokeeIncursion);

        // Pinned to legacy, the rotation never reaches the stryke-only event.
        assert_eq!(
            next_flash_event(FlashEvent::StrykeTheWyrm, at, 48, pinned).unwrap(),
            None
        );
        assert_eq!(
            next_flash_event(FlashEvent::LostSouls, at, 13, pinned).unwrap(),
            Some(at)
        );
    }

    #[test]
    fn test_pinned_upcoming_ignores_cutover() {
        let from = stryke().epoch.checked_add_hours(-1).unwrap();
        let pinned = FlashRuleSelection::Pinned(FlashRuleSetId::Legacy);
        let events: Vec<_> = upcoming_flash_events(from, 2, pinned)
            .unwrap()
            .into_iter()
            .map(|(_, e)| e)
            .collect();
        // Legacy hours 11419 and 11420, indices 5 and 6.
        assert_eq!(events, vec![FlashEvent::ForgottenSoldiers, FlashEvent::SurprisingSeedlings]);
    }

    #[test]
    fn test_upcoming_aligns_to_hour() {
        let from = utc(2025, 6, 1, 12, 42);
        let hours = upcoming_flash_events(from, 2, AUTO).unwrap();
        assert_eq!(hours[0].0, utc(2025, 6, 1, 12, 0));
        assert_eq!(hours[1].0, utc(2025, 6, 1, 13, 0));
    }

    #[test]
    fn test_next_flash_event() {
        let epoch = stryke().epoch;
        assert_eq!(
            next_flash_event(FlashEvent::StrykeTheWyrm, epoch, 24, AUTO).unwrap(),
            Some(epoch.checked_add_hours(2).unwrap())
        );
        assert_eq!(next_flash_event(FlashEvent::SpiderSwarm, epoch, 1, AUTO).unwrap(), Some(epoch));
        assert_eq!(next_flash_event(FlashEvent::EvilBloodwoodTree, epoch, 5, AUTO).unwrap(), None);
    }

    #[test]
    fn test_every_event_appears_each_cycle() {
        let epoch = stryke().epoch;
        let cycle = upcoming_flash_events(epoch, 14, AUTO).unwrap();
        for event in stryke().events.items() {
            assert_eq!(cycle.iter().filter(|(_, e)| e == event).count(), 1);
        }
    }

    #[test]
    fn test_rule_set_id_parsing() {
        assert_eq!("legacy".parse::<FlashRuleSetId>().unwrap(), FlashRuleSetId::Legacy);
        assert_eq!("Stryke".parse::<FlashRuleSetId>().unwrap(), FlashRuleSetId::Stryke);
        assert_eq!("stryke-the-wyrm".parse::<FlashRuleSetId>().unwrap(), FlashRuleSetId::Stryke);
        assert!("v3".parse::<FlashRuleSetId>().is_err());
    }

    #[test]
    fn test_names_shared_by_display_parse_and_serde() {
        for rules in &FLASH_RULE_SETS {
            for event in rules.events.items() {
                assert_eq!(event.to_string().parse::<FlashEvent>().unwrap(), *event);
                assert_eq!(serde_json::to_value(event).unwrap(), event.to_string());
            }
        }
        for id in FlashRuleSetId::iter() {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{id}\""));
            assert_eq!(serde_json::from_str::<FlashRuleSetId>(&json).unwrap(), id);
        }
        assert_eq!(<&'static str>::from(FlashRuleSetId::Legacy), "legacy");
    }

    #[test]
    fn test_display() {
        assert_eq!(FlashEvent::KingBlackDragonRampage.to_string(), "King Black Dragon Rampage");
        assert_eq!(FlashRuleSetId::Stryke.to_string(), "stryke");
    }
}
