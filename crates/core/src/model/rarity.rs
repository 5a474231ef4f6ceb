use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Card tier. The string forms are the values used by the select inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Rarity {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "raro")]
    Rare,
    #[serde(rename = "muito raro")]
    VeryRare,
}

impl Rarity {
    pub const ALL: [Rarity; 3] = [Rarity::Normal, Rarity::Rare, Rarity::VeryRare];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Normal => "normal",
            Rarity::Rare => "raro",
            Rarity::VeryRare => "muito raro",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rarity: {raw:?}")]
pub struct ParseRarityError {
    raw: String,
}

impl FromStr for Rarity {
    type Err = ParseRarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|rarity| rarity.as_str() == s)
            .ok_or_else(|| ParseRarityError { raw: s.to_string() })
    }
}

/// Rarity stage of the list filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RarityFilter {
    #[default]
    Any,
    Only(Rarity),
}

impl RarityFilter {
    /// Value of the "any rarity" option.
    pub const ANY_VALUE: &'static str = "todas";

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RarityFilter::Any => Self::ANY_VALUE,
            RarityFilter::Only(rarity) => rarity.as_str(),
        }
    }

    #[must_use]
    pub fn accepts(self, rarity: Rarity) -> bool {
        match self {
            RarityFilter::Any => true,
            RarityFilter::Only(wanted) => wanted == rarity,
        }
    }

    /// Parses a select value, falling back to `Any` for anything unknown.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        value.parse::<Rarity>().map_or(RarityFilter::Any, RarityFilter::Only)
    }
}

impl fmt::Display for RarityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_parses_select_values() {
        assert_eq!("normal".parse::<Rarity>().unwrap(), Rarity::Normal);
        assert_eq!("raro".parse::<Rarity>().unwrap(), Rarity::Rare);
        assert_eq!("muito raro".parse::<Rarity>().unwrap(), Rarity::VeryRare);
        assert!("".parse::<Rarity>().is_err());
        assert!("Raro".parse::<Rarity>().is_err());
    }

    #[test]
    fn rarity_deserializes_from_select_values() {
        let back: Rarity = serde_json::from_str("\"muito raro\"").unwrap();
        assert_eq!(back, Rarity::VeryRare);
        assert!(serde_json::from_str::<Rarity>("\"VeryRare\"").is_err());
    }

    #[test]
    fn rarity_filter_any_accepts_everything() {
        for rarity in Rarity::ALL {
            assert!(RarityFilter::Any.accepts(rarity));
        }
        assert!(RarityFilter::Only(Rarity::Rare).accepts(Rarity::Rare));
        assert!(!RarityFilter::Only(Rarity::Rare).accepts(Rarity::Normal));
    }

    #[test]
    fn rarity_filter_from_value_falls_back_to_any() {
        assert_eq!(RarityFilter::from_value("todas"), RarityFilter::Any);
        assert_eq!(RarityFilter::from_value("bogus"), RarityFilter::Any);
        assert_eq!(
            RarityFilter::from_value("muito raro"),
            RarityFilter::Only(Rarity::VeryRare)
        );
    }
}
