pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;
pub mod workflow;

mod panel;

pub use panel::EmployeesPage;
