//! Operations over the authoring draft, the deck and the list filter.
//!
//! The draft and the deck are separate values owned by the caller; the only
//! functions touching both are `save_draft` and `update_draft`.

use tracing::{debug, info, warn};
use tryunfo_core::model::{Card, CardDraft, CardId, Deck, DraftField, FilterCriteria, FilterField};

use crate::error::{DeleteError, SaveError};

/// Apply one form edit to the draft.
///
/// Checking the trump box is ignored while the deck already holds a trump
/// card; the form hides the checkbox in that case anyway.
pub fn update_draft(draft: &mut CardDraft, deck: &Deck, field: DraftField) {
    if matches!(field, DraftField::Trump(true)) && deck.has_trump() {
        warn!("ignoring trump flag: deck already has a Super Trunfo card");
        return;
    }
    debug!(?field, "draft field changed");
    draft.apply(field);
}

/// Commit the draft into the deck and reset the draft.
///
/// # Errors
///
/// Returns `SaveError::InvalidDraft` when the draft breaks a validation rule.
/// Returns `SaveError::TrumpTaken` when the draft is a trump card and the
/// deck already has one. Neither value is modified on error.
pub fn save_draft(draft: &mut CardDraft, deck: &mut Deck) -> Result<CardId, SaveError> {
    let card = draft.validate().inspect_err(|err| {
        warn!(%err, "refusing to save invalid draft");
    })?;
    if card.is_trump() && deck.has_trump() {
        warn!("refusing to save a second Super Trunfo card");
        return Err(SaveError::TrumpTaken);
    }

    let id = deck.commit(card);
    draft.reset();
    info!(%id, cards = deck.len(), has_trump = deck.has_trump(), "card saved");
    Ok(id)
}

/// Remove one card by id.
///
/// # Errors
///
/// Returns `DeleteError::NotFound` if no stored card has that id.
pub fn delete_card(deck: &mut Deck, id: CardId) -> Result<Card, DeleteError> {
    let Some(card) = deck.delete(id) else {
        warn!(%id, "delete requested for unknown card");
        return Err(DeleteError::NotFound(id));
    };
    info!(%id, cards = deck.len(), has_trump = deck.has_trump(), "card deleted");
    Ok(card)
}

/// Apply one filter edit.
pub fn update_filter(criteria: &mut FilterCriteria, field: FilterField) {
    debug!(?field, "filter changed");
    criteria.apply(field);
}
