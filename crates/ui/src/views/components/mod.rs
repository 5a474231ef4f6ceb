mod card;
mod filters;
mod form;
mod list;

pub use card::CardView;
pub use filters::FilterBar;
pub use form::CardForm;
pub use list::CardList;
