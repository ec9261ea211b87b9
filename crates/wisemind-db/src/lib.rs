pub mod access_tokens;
pub mod achievement;
pub mod identity_mapping;
pub mod lesson;
pub mod module;
pub mod schema;
pub mod user;
pub mod util;

pub use sea_orm;
