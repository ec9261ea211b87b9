pub mod account;
pub mod achievements;
pub mod catalog;
pub mod login;
pub mod progress;
pub mod status;
pub mod user;
