pub mod types;
pub mod config;
pub mod error;
pub mod slug;

pub use types::*;
pub use config::Config;
pub use error::StorefrontError;
pub use slug::build_slug;
