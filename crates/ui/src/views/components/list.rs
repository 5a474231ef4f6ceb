use dioxus::prelude::*;
use tryunfo_core::model::CardId;

use super::CardView;
use crate::vm::CardListVm;

#[component]
pub fn CardList(list: CardListVm, on_delete: Callback<CardId>) -> Element {
    let count_label = list.count_label();

    rsx! {
        section { class: "card-list",
            p { class: "card-list-count", "{count_label}" }
            for item in list.items.iter().cloned() {
                div { key: "{item.key()}", class: "card-list-item",
                    CardView { card: item.clone() }
                    if let Some(id) = item.id {
                        button {
                            class: "btn card-delete",
                            r#type: "button",
                            "data-testid": "delete-button",
                            onclick: move |_| on_delete.call(id),
                            "Excluir"
                        }
                    }
                }
            }
        }
    }
}
