use std::fmt;

use thiserror::Error;

use crate::model::{CardId, Rarity};

/// Lowest value a single attribute may take.
pub const ATTRIBUTE_MIN: i64 = 0;
/// Highest value a single attribute may take.
pub const ATTRIBUTE_MAX: i64 = 90;
/// Highest allowed sum of the three attributes.
pub const ATTRIBUTE_TOTAL_MAX: i64 = 210;

//
// ─── ATTRIBUTES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSlot {
    First,
    Second,
    Third,
}

impl AttributeSlot {
    pub const ALL: [AttributeSlot; 3] = [
        AttributeSlot::First,
        AttributeSlot::Second,
        AttributeSlot::Third,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            AttributeSlot::First => 0,
            AttributeSlot::Second => 1,
            AttributeSlot::Third => 2,
        }
    }

    /// One-based position, as shown in labels.
    #[must_use]
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for AttributeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attribute {}", self.number())
    }
}

/// The three numeric attributes of a stored card. Always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attributes([u8; 3]);

impl Attributes {
    #[must_use]
    pub fn get(&self, slot: AttributeSlot) -> u8 {
        self.0[slot.index()]
    }

    #[must_use]
    pub fn values(&self) -> [u8; 3] {
        self.0
    }

    #[must_use]
    pub fn total(&self) -> u16 {
        self.0.iter().map(|v| u16::from(*v)).sum()
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// A single edit coming from the authoring form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    Description(String),
    Image(String),
    Attribute(AttributeSlot, String),
    /// Raw select value; unknown values leave the rarity unset.
    Rarity(String),
    Trump(bool),
}

/// The in-progress card. Attributes are kept as typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: [String; 3],
    pub rarity: Option<Rarity>,
    pub trump: bool,
}

impl Default for CardDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image: String::new(),
            attributes: ["0".to_string(), "0".to_string(), "0".to_string()],
            rarity: Some(Rarity::Normal),
            trump: false,
        }
    }
}

impl CardDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Name(value) => self.name = value,
            DraftField::Description(value) => self.description = value,
            DraftField::Image(value) => self.image = value,
            DraftField::Attribute(slot, value) => self.attributes[slot.index()] = value,
            DraftField::Rarity(value) => self.rarity = value.parse().ok(),
            DraftField::Trump(value) => self.trump = value,
        }
    }

    /// Restores every field to its empty default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn attribute_text(&self, slot: AttributeSlot) -> &str {
        &self.attributes[slot.index()]
    }

    /// Integer value of one attribute, or `None` when the text is not a number.
    /// Fractions are truncated toward zero.
    #[must_use]
    pub fn attribute_value(&self, slot: AttributeSlot) -> Option<i64> {
        parse_attribute(self.attribute_text(slot))
    }

    /// Whether the draft may be committed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Points left before the total cap. Unreadable attributes count as zero
    /// and each value is clamped to the single-attribute range first.
    #[must_use]
    pub fn remaining_points(&self) -> i64 {
        let used: i64 = AttributeSlot::ALL
            .into_iter()
            .filter_map(|slot| self.attribute_value(slot))
            .map(|value| value.clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX))
            .sum();
        (ATTRIBUTE_TOTAL_MAX - used).max(0)
    }

    /// Checks the draft and snapshots it into a card ready for commit.
    ///
    /// # Errors
    ///
    /// Returns the first rule the draft breaks, in form order.
    pub fn validate(&self) -> Result<ValidatedCard, DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        if self.description.is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        if self.image.is_empty() {
            return Err(DraftError::EmptyImage);
        }
        let rarity = self.rarity.ok_or(DraftError::MissingRarity)?;

        let mut values = [0u8; 3];
        for slot in AttributeSlot::ALL {
            values[slot.index()] = self.checked_attribute(slot)?;
        }
        let attributes = Attributes(values);
        let total = i64::from(attributes.total());
        if total > ATTRIBUTE_TOTAL_MAX {
            return Err(DraftError::TotalExceeded { total });
        }

        Ok(ValidatedCard {
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            rarity,
            attributes,
            trump: self.trump,
        })
    }

    /// Every rule the draft currently breaks.
    #[must_use]
    pub fn issues(&self) -> Vec<DraftError> {
        let mut issues = Vec::new();
        if self.name.is_empty() {
            issues.push(DraftError::EmptyName);
        }
        if self.description.is_empty() {
            issues.push(DraftError::EmptyDescription);
        }
        if self.image.is_empty() {
            issues.push(DraftError::EmptyImage);
        }
        if self.rarity.is_none() {
            issues.push(DraftError::MissingRarity);
        }

        let mut total = Some(0i64);
        for slot in AttributeSlot::ALL {
            match self.checked_attribute(slot) {
                Ok(value) => total = total.and_then(|t| t.checked_add(i64::from(value))),
                Err(err) => {
                    total = match (&err, total) {
                        (DraftError::AttributeOutOfRange { value, .. }, Some(t)) => {
                            t.checked_add(*value)
                        }
                        _ => None,
                    };
                    issues.push(err);
                }
            }
        }
        if let Some(total) = total.filter(|t| *t > ATTRIBUTE_TOTAL_MAX) {
            issues.push(DraftError::TotalExceeded { total });
        }

        issues
    }

    fn checked_attribute(&self, slot: AttributeSlot) -> Result<u8, DraftError> {
        let raw = self.attribute_text(slot);
        let value = parse_attribute(raw).ok_or_else(|| DraftError::InvalidAttribute {
            slot,
            raw: raw.to_string(),
        })?;
        if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
            return Err(DraftError::AttributeOutOfRange { slot, value });
        }
        u8::try_from(value).map_err(|_| DraftError::AttributeOutOfRange { slot, value })
    }
}

/// Free-function form of [`CardDraft::is_valid`].
#[must_use]
pub fn validate(draft: &CardDraft) -> bool {
    draft.is_valid()
}

// A cleared number input reports an empty string; that counts as zero.
// Decimal text like "1.5" truncates; out-of-range magnitudes saturate.
fn parse_attribute(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok().filter(|v| v.is_finite())?;
    #[allow(clippy::cast_possible_truncation)]
    let truncated = value.trunc() as i64;
    Some(truncated)
}

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// A draft that passed validation. The only input `Deck::commit` accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCard {
    name: String,
    description: String,
    image: String,
    rarity: Rarity,
    attributes: Attributes,
    trump: bool,
}

impl ValidatedCard {
    #[must_use]
    pub fn is_trump(&self) -> bool {
        self.trump
    }

    #[must_use]
    pub fn assign_id(self, id: CardId) -> Card {
        Card {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
            rarity: self.rarity,
            attributes: self.attributes,
            trump: self.trump,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    name: String,
    description: String,
    image: String,
    rarity: Rarity,
    attributes: Attributes,
    trump: bool,
}

impl Card {
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    #[must_use]
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    #[must_use]
    pub fn is_trump(&self) -> bool {
        self.trump
    }
}

//
// ─── DRAFT VALIDATION ERRORS ───────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DraftError {
    #[error("card name cannot be empty")]
    EmptyName,

    #[error("card description cannot be empty")]
    EmptyDescription,

    #[error("card image cannot be empty")]
    EmptyImage,

    #[error("card rarity must be selected")]
    MissingRarity,

    #[error("{slot} is not a number: {raw:?}")]
    InvalidAttribute { slot: AttributeSlot, raw: String },

    #[error("{slot} must be between 0 and 90, got {value}")]
    AttributeOutOfRange { slot: AttributeSlot, value: i64 },

    #[error("attributes add up to {total}, the limit is 210")]
    TotalExceeded { total: i64 },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
