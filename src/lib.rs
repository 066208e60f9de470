pub mod bootstrap;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fauna;
pub mod schema;

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

/// Root of the hosted REST API, including the API version.
pub const DEFAULT_API_URL: &str = "https://rest.fauna.org/v1/";
