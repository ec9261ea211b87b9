pub mod progress;
pub mod unlock;
mod mutation;
mod query;

pub use mutation::*;
pub use query::*;
