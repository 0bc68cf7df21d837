pub mod components;
pub mod panel;
pub mod roster;
pub mod view_model;

pub use panel::ClearancePage;
