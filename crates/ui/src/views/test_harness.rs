use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use tryunfo_core::model::{CardDraft, CardId, Deck, DraftField, FilterCriteria, FilterField};

use super::components::{CardForm, CardList, FilterBar};
use super::TryunfoView;
use crate::context::{UiApp, build_app_context};
use crate::vm::{build_card_list_vm, build_form_vm};

#[derive(Clone)]
struct TestApp {
    deck: Deck,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Tryunfo".to_string()
    }

    fn initial_deck(&self) -> Deck {
        self.deck.clone()
    }
}

#[derive(Props, Clone)]
struct PageHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for PageHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn PageHarness(props: PageHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { TryunfoView {} }
}

#[component]
fn FormHarness(draft: CardDraft, deck: Deck) -> Element {
    let vm = build_form_vm(&draft, &deck);
    rsx! {
        CardForm {
            draft,
            vm,
            on_change: move |_: DraftField| {},
            on_save: move |()| {},
        }
    }
}

#[component]
fn ListHarness(deck: Deck, criteria: FilterCriteria) -> Element {
    let list = build_card_list_vm(&deck, &criteria);
    rsx! {
        FilterBar { criteria, on_change: move |_: FilterField| {} }
        CardList { list, on_delete: move |_: CardId| {} }
    }
}

fn render(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(&dom)
}

pub fn render_page(deck: Deck) -> String {
    let app = Arc::new(TestApp { deck });
    render(VirtualDom::new_with_props(PageHarness, PageHarnessProps { app }))
}

pub fn render_form(draft: CardDraft, deck: Deck) -> String {
    render(VirtualDom::new_with_props(
        FormHarness,
        FormHarnessProps { draft, deck },
    ))
}

pub fn render_list(deck: Deck, criteria: FilterCriteria) -> String {
    render(VirtualDom::new_with_props(
        ListHarness,
        ListHarnessProps { deck, criteria },
    ))
}
