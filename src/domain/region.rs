use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Geographic grouping offered by the filter bar.
///
/// Exactly one region is active at a time. The selection only drives
/// highlighting; no list is narrowed by it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RegionId {
    #[default]
    All,
    Americas,
    Europe,
    Asia,
    Africa,
    Oceania,
}

impl RegionId {
    /// Stable identifier, e.g. `europe`.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Label shown on the filter button.
    pub fn name(self) -> &'static str {
        match self {
            RegionId::All => "All Regions",
            RegionId::Americas => "Americas",
            RegionId::Europe => "Europe",
            RegionId::Asia => "Asia",
            RegionId::Africa => "Africa",
            RegionId::Oceania => "Oceania",
        }
    }

    /// All regions in display order.
    pub fn all() -> Vec<RegionId> {
        RegionId::iter().collect()
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        RegionId::iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<RegionId> {
        RegionId::iter().nth(index)
    }

    /// Next region, wrapping around to the first.
    pub fn next(self) -> RegionId {
        let len = RegionId::iter().len();
        RegionId::from_index((self.index() + 1) % len).unwrap_or_default()
    }

    /// Previous region, wrapping around to the last.
    pub fn prev(self) -> RegionId {
        let len = RegionId::iter().len();
        RegionId::from_index((self.index() + len - 1) % len).unwrap_or_default()
    }
}
