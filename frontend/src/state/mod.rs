pub mod resource;
pub mod session;
