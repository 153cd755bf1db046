//! Credential handling for inference providers.

pub mod credentials;

pub use credentials::ApiKey;
