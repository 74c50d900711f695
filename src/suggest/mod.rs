//! Suggestion domain core
//!
//! Term-gated retrieval of ranked suggestion records from the backend
//! provider, with fail-soft sanitization of everything it returns.

mod models;
mod provider;
mod resolver;

pub use models::{sanitize, Suggestion};
pub use provider::{HttpSuggestionProvider, SuggestionProvider};
pub use resolver::SuggestResolver;
