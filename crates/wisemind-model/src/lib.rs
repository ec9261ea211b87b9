pub mod achievement;
pub mod completion;
pub mod error;
pub mod lesson;
pub mod module;
pub mod permission;
pub mod progress;
pub mod status;
pub mod streak;
pub mod user;
