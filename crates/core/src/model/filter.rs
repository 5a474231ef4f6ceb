use crate::model::card::Card;
use crate::model::rarity::RarityFilter;

/// A single edit coming from the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    Name(String),
    /// Raw select value; unknown values mean "any".
    Rarity(String),
    TrumpOnly(bool),
}

/// Criteria for the card list.
///
/// Name and rarity combine with AND. Trump-only disables both inputs, so
/// while it is set only the trump stage applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-sensitive substring of the card name; empty matches all.
    pub name: String,
    pub rarity: RarityFilter,
    pub trump_only: bool,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, field: FilterField) {
        match field {
            FilterField::Name(value) => self.name = value,
            FilterField::Rarity(value) => self.rarity = RarityFilter::from_value(&value),
            FilterField::TrumpOnly(value) => self.trump_only = value,
        }
    }

    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        if self.trump_only {
            return card.is_trump();
        }
        card.name().contains(self.name.as_str()) && self.rarity.accepts(card.rarity())
    }

    /// The name and rarity inputs are disabled while trump-only is active.
    #[must_use]
    pub fn inputs_locked(&self) -> bool {
        self.trump_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardDraft, Deck, Rarity};

    fn deck() -> Deck {
        let mut deck = Deck::new();
        for (name, rarity, trump) in [("Ace", Rarity::Normal, false), ("King", Rarity::Rare, true)] {
            let draft = CardDraft {
                name: name.to_string(),
                description: "desc".to_string(),
                image: "img".to_string(),
                attributes: ["1".into(), "2".into(), "3".into()],
                rarity: Some(rarity),
                trump,
            };
            deck.commit(draft.validate().unwrap());
        }
        deck
    }

    fn names(deck: &Deck, criteria: &FilterCriteria) -> Vec<String> {
        deck.filter(criteria).map(|card| card.name().to_string()).collect()
    }

    #[test]
    fn empty_criteria_keeps_all_in_order() {
        let deck = deck();
        let criteria = FilterCriteria::new();
        assert_eq!(names(&deck, &criteria), ["Ace", "King"]);
    }

    #[test]
    fn name_stage_is_case_sensitive_substring() {
        let deck = deck();
        let mut criteria = FilterCriteria::new();
        criteria.apply(FilterField::Name("Ace".into()));
        assert_eq!(names(&deck, &criteria), ["Ace"]);
        criteria.apply(FilterField::Name("in".into()));
        assert_eq!(names(&deck, &criteria), ["King"]);
        criteria.apply(FilterField::Name("ace".into()));
        assert!(names(&deck, &criteria).is_empty());
    }

    #[test]
    fn rarity_stage_filters_by_tier() {
        let deck = deck();
        let mut criteria = FilterCriteria::new();
        criteria.apply(FilterField::Rarity("raro".into()));
        assert_eq!(names(&deck, &criteria), ["King"]);
        criteria.apply(FilterField::Rarity("muito raro".into()));
        assert!(names(&deck, &criteria).is_empty());
        criteria.apply(FilterField::Rarity("todas".into()));
        assert_eq!(names(&deck, &criteria), ["Ace", "King"]);
    }

    #[test]
    fn trump_only_ignores_locked_inputs() {
        let deck = deck();
        let criteria = FilterCriteria {
            name: "Ace".to_string(),
            rarity: RarityFilter::Only(Rarity::Normal),
            trump_only: true,
        };
        assert!(criteria.inputs_locked());
        assert_eq!(names(&deck, &criteria), ["King"]);

        let criteria = FilterCriteria {
            trump_only: true,
            ..FilterCriteria::default()
        };
        assert_eq!(names(&deck, &criteria), ["King"]);
    }
}
