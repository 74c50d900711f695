//! HTTP networking module
//!
//! Provides the outbound HTTP client used to reach the suggestion provider.

mod client;

pub use client::{HttpClient, ProviderResponse};
