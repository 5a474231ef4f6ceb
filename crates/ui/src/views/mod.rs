mod components;
mod tryunfo;

pub use components::{CardForm, CardList, CardView, FilterBar};
pub use tryunfo::TryunfoView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
