use dioxus::prelude::*;
use tryunfo_core::model::{FilterCriteria, FilterField, Rarity, RarityFilter};

#[component]
pub fn FilterBar(criteria: FilterCriteria, on_change: Callback<FilterField>) -> Element {
    let locked = criteria.inputs_locked();

    rsx! {
        aside { class: "filter-bar",
            label { class: "filter-field",
                "Pesquise as cartas:"
                input {
                    id: "filterCardName",
                    name: "filterCardName",
                    r#type: "text",
                    placeholder: "Nome da Carta",
                    "data-testid": "name-filter",
                    value: "{criteria.name}",
                    disabled: locked,
                    oninput: move |evt| on_change.call(FilterField::Name(evt.value())),
                }
            }
            label { class: "filter-field",
                select {
                    id: "filterCardRare",
                    name: "filterCardRare",
                    "data-testid": "rare-filter",
                    value: "{criteria.rarity}",
                    disabled: locked,
                    onchange: move |evt| on_change.call(FilterField::Rarity(evt.value())),
                    option {
                        value: RarityFilter::ANY_VALUE,
                        selected: criteria.rarity == RarityFilter::Any,
                        "{RarityFilter::ANY_VALUE}"
                    }
                    for rarity in Rarity::ALL {
                        option {
                            key: "{rarity}",
                            value: "{rarity}",
                            selected: criteria.rarity == RarityFilter::Only(rarity),
                            "{rarity}"
                        }
                    }
                }
            }
            label { class: "filter-field filter-field--check",
                "Trunfo"
                input {
                    id: "filterCardTrunfo",
                    name: "filterCardTrunfo",
                    r#type: "checkbox",
                    "data-testid": "trunfo-filter",
                    checked: criteria.trump_only,
                    onchange: move |evt| on_change.call(FilterField::TrumpOnly(evt.checked())),
                }
            }
        }
    }
}
