mod card_vm;
mod form_vm;
mod list_vm;

pub use card_vm::{CardVm, map_card_vms};
pub use form_vm::{FormVm, build_form_vm};
pub use list_vm::{CardListVm, build_card_list_vm};
