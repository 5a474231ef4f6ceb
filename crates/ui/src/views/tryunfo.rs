use dioxus::prelude::*;
use services::{delete_card, save_draft, update_draft, update_filter};
use tracing::warn;
use tryunfo_core::model::{CardDraft, CardId, DraftField, FilterCriteria, FilterField};

use super::components::{CardForm, CardList, CardView, FilterBar};
use crate::context::AppContext;
use crate::vm::{CardVm, build_card_list_vm, build_form_vm};

/// The whole page: authoring form, live preview, filters and card list.
///
/// Draft, deck and filter live in separate signals; only save and delete
/// touch more than one of them.
#[component]
pub fn TryunfoView() -> Element {
    let ctx = use_context::<AppContext>();
    let draft = use_signal(CardDraft::default);
    let deck = use_signal(|| ctx.initial_deck());
    let filter = use_signal(FilterCriteria::default);

    let on_draft_change = {
        let mut draft = draft;
        use_callback(move |field: DraftField| {
            let current = deck.read();
            update_draft(&mut draft.write(), &current, field);
        })
    };

    let on_save = {
        let mut draft = draft;
        let mut deck = deck;
        use_callback(move |()| {
            if let Err(err) = save_draft(&mut draft.write(), &mut deck.write()) {
                warn!(%err, "save rejected");
            }
        })
    };

    let on_filter_change = {
        let mut filter = filter;
        use_callback(move |field: FilterField| {
            update_filter(&mut filter.write(), field);
        })
    };

    let on_delete = {
        let mut deck = deck;
        use_callback(move |id: CardId| {
            if let Err(err) = delete_card(&mut deck.write(), id) {
                warn!(%err, "delete rejected");
            }
        })
    };

    let form_vm = build_form_vm(&draft.read(), &deck.read());
    let preview = CardVm::from_draft(&draft.read());
    let list = build_card_list_vm(&deck.read(), &filter.read());

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "{ctx.title()}" }
            main { class: "authoring",
                CardForm {
                    draft: draft(),
                    vm: form_vm,
                    on_change: on_draft_change,
                    on_save,
                }
                div { class: "card-preview-container",
                    h3 { "Pré-Visualização" }
                    CardView { card: preview }
                }
            }
            section { class: "deck",
                h2 { "Todas as Cartas Criadas" }
                FilterBar { criteria: filter(), on_change: on_filter_change }
                CardList { list, on_delete }
            }
        }
    }
}
