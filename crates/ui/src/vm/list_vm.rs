use tryunfo_core::model::{Deck, FilterCriteria};

use super::{CardVm, map_card_vms};

/// The filtered card list as rendered under the filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardListVm {
    pub items: Vec<CardVm>,
    pub total: usize,
    pub filters_locked: bool,
}

impl CardListVm {
    #[must_use]
    pub fn count_label(&self) -> String {
        match (self.items.len(), self.total) {
            (_, 0) => "Nenhuma carta criada ainda.".to_string(),
            (0, _) => "Nenhuma carta corresponde aos filtros.".to_string(),
            (shown, total) if shown == total => format!("{total} carta(s)"),
            (shown, total) => format!("Mostrando {shown} de {total} carta(s)"),
        }
    }
}

#[must_use]
pub fn build_card_list_vm(deck: &Deck, criteria: &FilterCriteria) -> CardListVm {
    CardListVm {
        items: map_card_vms(deck.filter(criteria)),
        total: deck.len(),
        filters_locked: criteria.inputs_locked(),
    }
}
