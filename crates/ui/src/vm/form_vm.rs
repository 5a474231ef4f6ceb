use tryunfo_core::model::{CardDraft, Deck, DraftError};

/// Derived state of the authoring form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormVm {
    pub can_save: bool,
    /// False once the deck holds a trump card; the form shows a notice instead.
    pub show_trump_input: bool,
    pub remaining_points: i64,
    pub hints: Vec<String>,
}

#[must_use]
pub fn build_form_vm(draft: &CardDraft, deck: &Deck) -> FormVm {
    // An untouched form would list every rule at once; stay quiet until the first edit.
    let hints = if *draft == CardDraft::default() {
        Vec::new()
    } else {
        draft.issues().iter().map(hint_for).collect()
    };

    FormVm {
        can_save: draft.is_valid(),
        show_trump_input: !deck.has_trump(),
        remaining_points: draft.remaining_points(),
        hints,
    }
}

fn hint_for(issue: &DraftError) -> String {
    match issue {
        DraftError::EmptyName => "Informe o nome da carta.".to_string(),
        DraftError::EmptyDescription => "Informe a descrição da carta.".to_string(),
        DraftError::EmptyImage => "Informe a imagem da carta.".to_string(),
        DraftError::MissingRarity => "Escolha a raridade da carta.".to_string(),
        DraftError::InvalidAttribute { slot, .. } => {
            format!("Atributo {} deve ser um número.", slot.number())
        }
        DraftError::AttributeOutOfRange { slot, .. } => {
            format!("Atributo {} deve estar entre 0 e 90.", slot.number())
        }
        DraftError::TotalExceeded { total } => {
            format!("A soma dos atributos ({total}) passa de 210.")
        }
        other => other.to_string(),
    }
}
