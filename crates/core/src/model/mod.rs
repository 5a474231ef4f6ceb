mod card;
mod deck;
mod filter;
mod ids;
mod rarity;

pub use card::{
    ATTRIBUTE_MAX, ATTRIBUTE_MIN, ATTRIBUTE_TOTAL_MAX, AttributeSlot, Attributes, Card,
    CardDraft, DraftError, DraftField, ValidatedCard, validate,
};
pub use deck::Deck;
pub use filter::{FilterCriteria, FilterField};
pub use ids::CardId;
pub use rarity::{ParseRarityError, Rarity, RarityFilter};
