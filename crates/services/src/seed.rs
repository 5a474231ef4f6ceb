//! Sample deck for demos and manual testing.

use serde::Deserialize;
use tracing::info;
use tryunfo_core::model::{CardDraft, Deck, Rarity};

use crate::card_service::save_draft;
use crate::error::SeedError;

const DEMO_DECK_JSON: &str = include_str!("../assets/demo_deck.json");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedCard {
    name: String,
    description: String,
    image: String,
    attributes: [u8; 3],
    rarity: Rarity,
    #[serde(default)]
    trump: bool,
}

impl SeedCard {
    fn into_draft(self) -> CardDraft {
        CardDraft {
            name: self.name,
            description: self.description,
            image: self.image,
            attributes: self.attributes.map(|value| value.to_string()),
            rarity: Some(self.rarity),
            trump: self.trump,
        }
    }
}

/// Build a deck holding the bundled demo cards.
///
/// # Errors
///
/// Returns `SeedError` if the bundled data cannot be read or a card breaks a
/// save rule.
pub fn demo_deck() -> Result<Deck, SeedError> {
    deck_from_json(DEMO_DECK_JSON)
}

fn deck_from_json(json: &str) -> Result<Deck, SeedError> {
    let seeds: Vec<SeedCard> = serde_json::from_str(json)?;
    let mut deck = Deck::new();
    for seed in seeds {
        let mut draft = seed.into_draft();
        save_draft(&mut draft, &mut deck)?;
    }
    info!(cards = deck.len(), "demo deck ready");
    Ok(deck)
}
