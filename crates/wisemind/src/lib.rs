mod client;
pub mod error;
pub mod guard;
pub mod store;

pub use client::base::Api;
pub use client::base::ApiUrl;
pub use client::base::BaseClient;
pub use client::base::Config;
pub use client::base::PublicClient;
pub use client::base::SecureClient;
pub use client::simple::SimpleClient;
