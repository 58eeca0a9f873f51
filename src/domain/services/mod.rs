pub mod account;
pub mod token;
