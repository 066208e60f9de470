//! Low-level client for the Fauna REST service.
//!
//! This module covers only the handful of calls the bootstrap needs: deleting the
//! account's root namespace, minting scoped API keys, and replacing per-class
//! configuration. It is not a general-purpose client; higher-level orchestration
//! lives in [`crate::bootstrap`].

pub mod client;
pub mod error;
pub mod http;
pub mod object;
