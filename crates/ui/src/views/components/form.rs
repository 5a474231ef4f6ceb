use dioxus::prelude::*;
use tryunfo_core::model::{AttributeSlot, CardDraft, DraftField, Rarity};

use crate::vm::FormVm;

#[component]
pub fn CardForm(
    draft: CardDraft,
    vm: FormVm,
    on_change: Callback<DraftField>,
    on_save: Callback<()>,
) -> Element {
    let rarity_value = draft.rarity.map(Rarity::as_str).unwrap_or_default();

    rsx! {
        form { class: "card-form",
            onsubmit: move |evt| evt.prevent_default(),
            label { class: "form-field",
                "Nome da Carta:"
                input {
                    id: "cardName",
                    name: "cardName",
                    r#type: "text",
                    "data-testid": "name-input",
                    value: "{draft.name}",
                    oninput: move |evt| on_change.call(DraftField::Name(evt.value())),
                }
            }
            label { class: "form-field",
                "Descrição da Carta:"
                textarea {
                    id: "cardDescription",
                    name: "cardDescription",
                    rows: 3,
                    cols: 50,
                    "data-testid": "description-input",
                    value: "{draft.description}",
                    oninput: move |evt| on_change.call(DraftField::Description(evt.value())),
                }
            }
            for slot in AttributeSlot::ALL {
                label { key: "{slot.number()}", class: "form-field form-field--attr",
                    "Atributo {slot.number()}:"
                    input {
                        id: "cardAttr{slot.number()}",
                        name: "cardAttr{slot.number()}",
                        r#type: "number",
                        min: 0,
                        max: 90,
                        "data-testid": "attr{slot.number()}-input",
                        value: "{draft.attribute_text(slot)}",
                        oninput: move |evt| on_change.call(DraftField::Attribute(slot, evt.value())),
                    }
                }
            }
            p { class: "form-points", "Pontos restantes = {vm.remaining_points}" }
            label { class: "form-field",
                "Imagem da Carta:"
                input {
                    id: "cardImage",
                    name: "cardImage",
                    r#type: "text",
                    "data-testid": "image-input",
                    value: "{draft.image}",
                    oninput: move |evt| on_change.call(DraftField::Image(evt.value())),
                }
            }
            label { class: "form-field",
                "Raridade da Carta:"
                select {
                    id: "cardRare",
                    name: "cardRare",
                    "data-testid": "rare-input",
                    value: "{rarity_value}",
                    onchange: move |evt| on_change.call(DraftField::Rarity(evt.value())),
                    for rarity in Rarity::ALL {
                        option { key: "{rarity}", value: "{rarity}", selected: draft.rarity == Some(rarity), "{rarity}" }
                    }
                }
            }
            if vm.show_trump_input {
                label { class: "form-field form-field--check",
                    "É o Super Trunfo?"
                    input {
                        id: "cardTrunfo",
                        name: "cardTrunfo",
                        r#type: "checkbox",
                        "data-testid": "trunfo-input",
                        checked: draft.trump,
                        onchange: move |evt| on_change.call(DraftField::Trump(evt.checked())),
                    }
                }
            } else {
                span { class: "form-trump-taken", "Você já tem um Super Trunfo em seu baralho" }
            }
            if !vm.hints.is_empty() {
                ul { class: "form-hints",
                    for hint in vm.hints.iter() {
                        li { key: "{hint}", "{hint}" }
                    }
                }
            }
            button {
                class: "btn form-save",
                r#type: "button",
                "data-testid": "save-button",
                disabled: !vm.can_save,
                onclick: move |_| on_save.call(()),
                "Salvar"
            }
        }
    }
}
