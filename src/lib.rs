//! CineSuggest: search-as-you-type suggestions for a Brazilian cinema catalog
//!
//! A gateway that forwards validated search terms to a backend suggestion
//! provider, sanitizes its response, and serves the result over a typed
//! GraphQL query layer, together with the client-side debounce and gating
//! pipeline that drives it.

pub mod config;
pub mod debounce;
pub mod network;
pub mod pipeline;
pub mod query;
pub mod suggest;
pub mod web;

pub use config::Settings;
pub use pipeline::SuggestPipeline;
pub use suggest::{SuggestResolver, Suggestion};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum characters a term needs before a query is issued
pub const MIN_TERM_LEN: usize = 4;

/// Quiet period for the input debouncer in milliseconds
pub const DEBOUNCE_QUIET_MS: u64 = 300;

/// Maximum suggestions handed to presentation
pub const MAX_SUGGESTIONS: usize = 20;

/// Default timeout for provider requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 5;
