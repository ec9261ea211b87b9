pub mod user_achievement;
mod mutation;
mod query;

pub use mutation::*;
pub use query::*;
