pub mod employees;
pub mod login;
pub mod reviews;
