//! twofa-core: Shared infrastructure for the 2FA reset contract crates.
pub mod config;
pub mod error;
pub mod observability;

pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
