//! Suggestion provider backends

use crate::network::{HttpClient, ProviderResponse};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use url::Url;

/// Trait for backend suggestion sources
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &str;

    /// Fetch the raw provider response for a term
    async fn fetch(&self, client: &HttpClient, term: &str) -> Result<ProviderResponse>;
}

/// The catalog's HTTP suggestion provider
///
/// Speaks the backend contract: `GET /suggest?term=<string>` returning a
/// JSON array of `{text, type}` records ranked by upstream popularity.
pub struct HttpSuggestionProvider {
    endpoint: Url,
}

impl HttpSuggestionProvider {
    /// Build a provider from its base URL (e.g. `http://api:8000`)
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let endpoint = base.join("/suggest")?;
        Ok(Self { endpoint })
    }

    /// The resolved `/suggest` endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SuggestionProvider for HttpSuggestionProvider {
    fn name(&self) -> &str {
        "catalog"
    }

    async fn fetch(&self, client: &HttpClient, term: &str) -> Result<ProviderResponse> {
        let mut params = HashMap::new();
        params.insert("term".to_string(), term.to_string());

        client.get_with_params(self.endpoint.as_str(), params).await
    }
}
