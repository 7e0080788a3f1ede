pub mod jwt;
pub mod storage;
