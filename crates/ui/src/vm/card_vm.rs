use tryunfo_core::model::{AttributeSlot, Card, CardDraft, CardId};

/// UI-ready card, shared by the live preview and the list tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardVm {
    /// `None` for the draft preview.
    pub id: Option<CardId>,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rarity: String,
    pub attributes: [String; 3],
    pub trump: bool,
}

impl CardVm {
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        let attributes = card.attributes();
        Self {
            id: Some(card.id()),
            name: card.name().to_owned(),
            description: card.description().to_owned(),
            image: card.image().to_owned(),
            rarity: card.rarity().as_str().to_owned(),
            attributes: AttributeSlot::ALL.map(|slot| attributes.get(slot).to_string()),
            trump: card.is_trump(),
        }
    }

    /// Mirrors the draft exactly as typed, invalid values included.
    #[must_use]
    pub fn from_draft(draft: &CardDraft) -> Self {
        Self {
            id: None,
            name: draft.name.clone(),
            description: draft.description.clone(),
            image: draft.image.clone(),
            rarity: draft
                .rarity
                .map(|rarity| rarity.as_str().to_owned())
                .unwrap_or_default(),
            attributes: draft.attributes.clone(),
            trump: draft.trump,
        }
    }

    /// DOM key for list rendering.
    #[must_use]
    pub fn key(&self) -> String {
        self.id.map_or_else(|| "draft".to_string(), |id| id.to_string())
    }
}

/// Map stored cards into tile view models.
#[must_use]
pub fn map_card_vms<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<CardVm> {
    cards.into_iter().map(CardVm::from_card).collect()
}
