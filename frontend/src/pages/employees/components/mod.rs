pub mod create_modal;
pub mod roster;
