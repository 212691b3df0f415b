//! Travelling Merchant Stock
//!
//! The merchant sells three rolled items each runedate. Slots 1 and 2 draw
//! from the common table, slot 3 from the rare table, each with its own
//! seed constant.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::core::calendar::{runedate, runedates, RuneDate, Timestamp};
use crate::rotation::slot::{resolve_slot, Slot, SlotTable};

/// An item the travelling merchant can stock.
///
/// `Display`, `FromStr` and serde all use the in-game display name.
#[allow(missing_docs)]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Item {
    #[strum(serialize = "Advanced pulse core")]
    AdvancedPulseCore,
    #[strum(serialize = "Anima crystal")]
    AnimaCrystal,
    #[strum(serialize = "Barrel of bait")]
    BarrelOfBait,
    #[strum(serialize = "Broken fishing rod")]
    BrokenFishingRod,
    #[strum(serialize = "Crystal triskelion")]
    CrystalTriskelion,
    #[strum(serialize = "D&D token (daily)")]
    DdTokenDaily,
    #[strum(serialize = "D&D token (monthly)")]
    DdTokenMonthly,
    #[strum(serialize = "D&D token (weekly)")]
    DdTokenWeekly,
    #[strum(serialize = "Deathtouched dart")]
    DeathtouchedDart,
    #[strum(serialize = "Dragonkin Lamp")]
    DragonkinLamp,
    #[strum(serialize = "Dungeoneering Wildcard")]
    DungeoneeringWildcard,
    #[strum(serialize = "Gift for the Reaper")]
    GiftForTheReaper,
    #[strum(serialize = "Goebie burial charm")]
    GoebieBurialCharm,
    #[strum(serialize = "Harmonic dust")]
    HarmonicDust,
    #[strum(serialize = "Horn of honour")]
    HornOfHonour,
    #[strum(serialize = "Large goebie burial charm")]
    LargeGoebieBurialCharm,
    #[strum(serialize = "Livid plant")]
    LividPlant,
    #[strum(serialize = "Menaphite gift offering (large)")]
    MenaphiteGiftOfferingLarge,
    #[strum(serialize = "Menaphite gift offering (medium)")]
    MenaphiteGiftOfferingMedium,
    #[strum(serialize = "Menaphite gift offering (small)")]
    MenaphiteGiftOfferingSmall,
    #[strum(serialize = "Message in a bottle")]
    MessageInABottle,
    #[strum(serialize = "Sacred clay")]
    SacredClay,
    #[strum(serialize = "Shattered anima")]
    ShatteredAnima,
    #[strum(serialize = "Silverhawk down")]
    SilverhawkDown,
    #[strum(serialize = "Slayer VIP coupon")]
    SlayerVipCoupon,
    #[strum(serialize = "Small goebie burial charm")]
    SmallGoebieBurialCharm,
    #[strum(serialize = "Starved ancient effigy")]
    StarvedAncientEffigy,
    #[strum(serialize = "Taijitu")]
    Taijitu,
    #[strum(serialize = "Tangled fishbowl")]
    TangledFishbowl,
    #[strum(serialize = "Unfocused damage enhancer")]
    UnfocusedDamageEnhancer,
    #[strum(serialize = "Unfocused reward enhancer")]
    UnfocusedRewardEnhancer,
    #[strum(serialize = "Unstable air rune")]
    UnstableAirRune,
}

impl TryFrom<String> for Item {
    type Error = strum::ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Shared table for slots 1 and 2. Order is the game's, not alphabetical.
pub const COMMON_ITEMS: SlotTable<Item> = SlotTable::new(&[
    Item::GiftForTheReaper,
    Item::BrokenFishingRod,
    Item::BarrelOfBait,
    Item::AnimaCrystal,
    Item::SmallGoebieBurialCharm,
    Item::GoebieBurialCharm,
    Item::MenaphiteGiftOfferingSmall,
    Item::MenaphiteGiftOfferingMedium,
    Item::ShatteredAnima,
    Item::DdTokenDaily,
    Item::SacredClay,
    Item::LividPlant,
    Item::SlayerVipCoupon,
    Item::SilverhawkDown,
    Item::UnstableAirRune,
    Item::AdvancedPulseCore,
    Item::TangledFishbowl,
    Item::UnfocusedDamageEnhancer,
    Item::HornOfHonour,
]);

/// Table for slot 3.
pub const RARE_ITEMS: SlotTable<Item> = SlotTable::new(&[
    Item::Taijitu,
    Item::LargeGoebieBurialCharm,
    Item::MenaphiteGiftOfferingLarge,
    Item::DdTokenWeekly,
    Item::DdTokenMonthly,
    Item::DungeoneeringWildcard,
    Item::MessageInABottle,
    Item::CrystalTriskelion,
    Item::StarvedAncientEffigy,
    Item::DeathtouchedDart,
    Item::DragonkinLamp,
    Item::HarmonicDust,
    Item::UnfocusedRewardEnhancer,
]);

/// First stock slot.
pub const SLOT_1: Slot<Item> = Slot::new("merchant_slot_1", 3, COMMON_ITEMS);

/// Second stock slot.
pub const SLOT_2: Slot<Item> = Slot::new("merchant_slot_2", 8, COMMON_ITEMS);

/// Third stock slot.
pub const SLOT_3: Slot<Item> = Slot::new("merchant_slot_3", 5, RARE_ITEMS);

/// One runedate's stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stock {
    /// Common slot 1.
    pub slot1: Item,
    /// Common slot 2.
    pub slot2: Item,
    /// Rare slot.
    pub slot3: Item,
}

impl Stock {
    /// Items in slot order.
    #[inline]
    pub fn items(&self) -> [Item; 3] {
        [self.slot1, self.slot2, self.slot3]
    }

    /// Whether any slot holds `item`.
    #[inline]
    pub fn contains(&self, item: Item) -> bool {
        self.items().contains(&item)
    }
}

impl From<Stock> for (Item, Item, Item) {
    fn from(stock: Stock) -> Self {
        (stock.slot1, stock.slot2, stock.slot3)
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.slot1, self.slot2, self.slot3)
    }
}

/// Stock on `runedate`.
pub fn stock_for_runedate(runedate: RuneDate) -> Stock {
    Stock {
        slot1: resolve_slot(runedate, &SLOT_1),
        slot2: resolve_slot(runedate, &SLOT_2),
        slot3: resolve_slot(runedate, &SLOT_3),
    }
}

/// Stock on sale at `timestamp`.
pub fn stock(timestamp: Timestamp) -> Stock {
    stock_for_runedate(runedate(timestamp))
}

/// Stock for `days` consecutive runedates starting with the one containing `from`.
pub fn upcoming_stock(from: Timestamp, days: u32) -> Vec<(RuneDate, Stock)> {
    runedates(runedate(from), days)
        .map(|day| (day, stock_for_runedate(day)))
        .collect()
}


/// First runedate at or after `from` whose stock includes `item`, searching
/// at most `horizon_days` days.
pub fn next_appearance(item: Item, from: Timestamp, horizon_days: u32) -> Option<RuneDate> {
    let mut day = runedate(from);
    for _ in 0..horizon_days {
        if stock_for_runedate(day).contains(item) {
            return Some(day);
        }
        day = day.next();
    }
    None
}

// =============================================================================
// TESTS
// =============================================================================
