use crate::model::card::{Card, ValidatedCard};
use crate::model::filter::FilterCriteria;
use crate::model::ids::CardId;

/// The stored cards, in commit order.
///
/// Ids come from a counter that only grows, so a deleted card's id is never
/// handed out again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    next_id: u64,
    has_trump: bool,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether a stored card carries the trump flag.
    #[must_use]
    pub fn has_trump(&self) -> bool {
        self.has_trump
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Appends the card and returns its new id.
    ///
    /// The trump flag only ever turns on here; deleting is what clears it.
    pub fn commit(&mut self, card: ValidatedCard) -> CardId {
        self.next_id += 1;
        let id = CardId::new(self.next_id);
        self.has_trump = self.has_trump || card.is_trump();
        self.cards.push(card.assign_id(id));
        id
    }

    /// Removes the card with `id`, if present.
    pub fn delete(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id() == id)?;
        self.delete_at(index)
    }

    /// Removes the card at `index` of the full deck, if in range.
    pub fn delete_at(&mut self, index: usize) -> Option<Card> {
        if index >= self.cards.len() {
            return None;
        }
        let removed = self.cards.remove(index);
        self.has_trump = self.cards.iter().any(Card::is_trump);
        Some(removed)
    }

    /// Cards passing `criteria`, in deck order.
    pub fn filter<'a>(&'a self, criteria: &'a FilterCriteria) -> impl Iterator<Item = &'a Card> {
        self.cards.iter().filter(move |card| criteria.matches(card))
    }
}
