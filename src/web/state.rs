//! Application state shared across handlers

use super::graphql::SuggestSchema;
use crate::config::Settings;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// GraphQL schema serving the suggestion query
    pub schema: SuggestSchema,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, schema: SuggestSchema) -> Self {
        Self {
            settings: Arc::new(settings),
            schema,
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
