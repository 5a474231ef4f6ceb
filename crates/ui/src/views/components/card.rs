use dioxus::prelude::*;
use tryunfo_core::model::AttributeSlot;

use crate::vm::CardVm;

/// A single card face. Used for the live preview and for every list tile.
#[component]
pub fn CardView(card: CardVm) -> Element {
    rsx! {
        article { class: if card.trump { "card card--trump" } else { "card" },
            h4 { class: "card-name", "data-testid": "name-card", "{card.name}" }
            if !card.image.is_empty() {
                img { class: "card-image", "data-testid": "image-card", src: "{card.image}", alt: "{card.name}" }
            }
            p { class: "card-description", "data-testid": "description-card", "{card.description}" }
            ul { class: "card-attributes",
                for (slot, value) in AttributeSlot::ALL.into_iter().zip(card.attributes.iter().cloned()) {
                    li { key: "{slot.number()}", "data-testid": "attr{slot.number()}-card",
                        span { class: "card-attr-label", "Atributo {slot.number()}" }
                        span { class: "card-attr-value", "{value}" }
                    }
                }
            }
            p { class: "card-rarity", "data-testid": "rare-card", "{card.rarity}" }
            if card.trump {
                p { class: "card-trump", "data-testid": "trunfo-card", "Super Trunfo" }
            }
        }
    }
}
