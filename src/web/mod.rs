//! Web server module
//!
//! The GraphQL query surface and health probe exposed to consumers.

pub mod graphql;
mod handlers;
mod routes;
mod state;

pub use graphql::{build_schema, SuggestSchema};
pub use routes::create_router;
pub use state::AppState;
