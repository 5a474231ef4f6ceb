use services::{demo_deck, save_draft};
use tryunfo_core::model::{
    AttributeSlot, CardDraft, Deck, DraftField, FilterCriteria, FilterField,
};

use super::test_harness::{render_form, render_list, render_page};

fn draft(name: &str, rarity: &str, attrs: [&str; 3], trump: bool) -> CardDraft {
    let mut draft = CardDraft::new();
    draft.apply(DraftField::Name(name.to_string()));
    draft.apply(DraftField::Description(format!("{name} description")));
    draft.apply(DraftField::Image(format!("https://cards.example/{name}.png")));
    draft.apply(DraftField::Rarity(rarity.to_string()));
    draft.apply(DraftField::Trump(trump));
    for (slot, value) in AttributeSlot::ALL.into_iter().zip(attrs) {
        draft.apply(DraftField::Attribute(slot, value.to_string()));
    }
    draft
}

fn ace_and_king() -> Deck {
    let mut deck = Deck::new();
    let mut ace = draft("Ace", "normal", ["10", "20", "30"], false);
    save_draft(&mut ace, &mut deck).expect("save ace");
    let mut king = draft("King", "raro", ["90", "90", "30"], true);
    save_draft(&mut king, &mut deck).expect("save king");
    deck
}

#[test]
fn page_smoke_renders_empty_deck() {
    let html = render_page(Deck::new());
    assert!(html.contains("Tryunfo"), "missing title in {html}");
    assert!(html.contains("Pré-Visualização"), "missing preview in {html}");
    assert!(html.contains("trunfo-input"), "missing trump checkbox in {html}");
    assert!(html.contains("Nenhuma carta criada ainda."), "missing empty state in {html}");
    assert_eq!(html.matches("delete-button").count(), 0);
}

#[test]
fn page_smoke_renders_seeded_deck() {
    let deck = demo_deck().expect("demo deck");
    let html = render_page(deck.clone());
    for card in deck.cards() {
        assert!(html.contains(card.name()), "missing {} in {html}", card.name());
    }
    assert_eq!(html.matches("delete-button").count(), deck.len());
    assert!(
        html.contains("Você já tem um Super Trunfo em seu baralho"),
        "missing trump notice in {html}"
    );
    assert!(!html.contains("trunfo-input"), "trump checkbox still shown in {html}");
}

#[test]
fn form_smoke_echoes_draft_and_hints() {
    let draft = draft("Titan", "muito raro", ["90", "90", "90"], false);
    let html = render_form(draft, Deck::new());
    assert!(html.contains("Titan"), "missing name in {html}");
    assert!(html.contains("Pontos restantes = 0"), "missing points in {html}");
    assert!(
        html.contains("A soma dos atributos (270) passa de 210."),
        "missing hint in {html}"
    );
    assert!(html.contains("trunfo-input"), "missing trump checkbox in {html}");
}

#[test]
fn form_smoke_hides_trump_input_when_deck_has_trump() {
    let html = render_form(CardDraft::default(), ace_and_king());
    assert!(html.contains("Você já tem um Super Trunfo em seu baralho"));
    assert!(!html.contains("trunfo-input"));
    assert!(!html.contains("form-hints"), "fresh form should not show hints: {html}");
}

#[test]
fn list_smoke_renders_every_card_with_delete() {
    let html = render_list(ace_and_king(), FilterCriteria::new());
    assert!(html.contains("Ace description"), "missing Ace in {html}");
    assert!(html.contains("King description"), "missing King in {html}");
    assert!(html.contains("Super Trunfo"), "missing trump badge in {html}");
    assert!(html.contains("raro"), "missing rarity in {html}");
    assert_eq!(html.matches("delete-button").count(), 2);
    assert!(html.contains("2 carta(s)"), "missing count in {html}");
}

#[test]
fn list_smoke_trump_filter_shows_only_trump_card() {
    let mut criteria = FilterCriteria::new();
    criteria.apply(FilterField::TrumpOnly(true));
    let html = render_list(ace_and_king(), criteria);
    assert!(html.contains("King description"), "missing King in {html}");
    assert!(!html.contains("Ace description"), "Ace should be hidden in {html}");
    assert_eq!(html.matches("delete-button").count(), 1);
    assert!(html.contains("Mostrando 1 de 2 carta(s)"), "missing count in {html}");
}

#[test]
fn list_smoke_name_filter_is_case_sensitive() {
    let mut criteria = FilterCriteria::new();
    criteria.apply(FilterField::Name("king".to_string()));
    let html = render_list(ace_and_king(), criteria);
    assert_eq!(html.matches("delete-button").count(), 0);
    assert!(html.contains("Nenhuma carta corresponde aos filtros."));
}
