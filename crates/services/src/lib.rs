#![forbid(unsafe_code)]

pub mod card_service;
pub mod error;
pub mod seed;

pub use card_service::{delete_card, save_draft, update_draft, update_filter};
pub use error::{DeleteError, SaveError, SeedError};
pub use seed::demo_deck;
