//! Query-layer resolver
//!
//! Single entry point translating a validated term into one provider call
//! and a sanitized suggestion list. The contract is total: every failure
//! mode collapses to an empty list, with diagnostics going to the log
//! rather than the caller.

use super::models::{sanitize, Suggestion};
use super::provider::SuggestionProvider;
use crate::network::HttpClient;
use crate::query::SuggestTerm;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Resolver forwarding validated terms to the suggestion provider
pub struct SuggestResolver {
    client: HttpClient,
    provider: Arc<dyn SuggestionProvider>,
    min_term_length: usize,
}

impl SuggestResolver {
    /// Create a resolver with the default minimum term length
    pub fn new(client: HttpClient, provider: Arc<dyn SuggestionProvider>) -> Self {
        Self {
            client,
            provider,
            min_term_length: crate::MIN_TERM_LEN,
        }
    }

    /// Override the minimum term length
    pub fn with_min_term_length(mut self, min_len: usize) -> Self {
        self.min_term_length = min_len;
        self
    }

    /// Resolve suggestions for a term
    ///
    /// Trims the term and re-validates the length gate before any network
    /// activity, so callers that skip their own gate still cannot push
    /// short terms upstream. One GET per invocation, no retries; a failed
    /// fetch yields an empty list until the next trigger.
    pub async fn suggestions(&self, term: &str) -> Vec<Suggestion> {
        let term = SuggestTerm::parse(term);
        if !term.meets_minimum(self.min_term_length) {
            debug!("term below minimum length, skipping provider call");
            return vec![];
        }

        let response = match self.provider.fetch(&self.client, term.as_str()).await {
            Ok(response) => response,
            Err(err) => {
                error!(
                    provider = self.provider.name(),
                    "suggestion fetch failed: {err:#}"
                );
                return vec![];
            }
        };

        if !response.is_success() {
            error!(
                provider = self.provider.name(),
                status = response.status,
                body = %response.text,
                "provider returned error status"
            );
            return vec![];
        }

        let payload: Value = match response.json() {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    "provider payload is not valid JSON: {err}"
                );
                return vec![];
            }
        };

        let suggestions = sanitize(&payload);
        debug!(count = suggestions.len(), "sanitized provider payload");
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::HttpSuggestionProvider;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn resolver_for(server: &MockServer) -> SuggestResolver {
        let provider = HttpSuggestionProvider::new(&server.uri()).unwrap();
        SuggestResolver::new(HttpClient::new().unwrap(), Arc::new(provider))
    }

    #[tokio::test]
    async fn short_terms_skip_the_provider() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let resolver = resolver_for(&server);
        assert!(resolver.suggestions("").await.is_empty());
        assert!(resolver.suggestions("abc").await.is_empty());
        // Surrounding whitespace does not count toward the threshold.
        assert!(resolver.suggestions("   ab   ").await.is_empty());
    }

    #[tokio::test]
    async fn valid_terms_issue_exactly_one_trimmed_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suggest"))
            .and(query_param("term", "carla"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"text": "Carla Camurati", "type": "diretora"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let resolver = resolver_for(&server);
        let suggestions = resolver.suggestions("  carla  ").await;
        assert_eq!(
            suggestions,
            vec![Suggestion::new("Carla Camurati", "diretora")]
        );
    }

    #[tokio::test]
    async fn accented_terms_pass_the_gate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suggest"))
            .and(query_param("term", "joão"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let resolver = resolver_for(&server);
        assert!(resolver.suggestions("joão").await.is_empty());
    }

    #[tokio::test]
    async fn error_status_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suggest"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let resolver = resolver_for(&server);
        assert!(resolver.suggestions("carla").await.is_empty());
    }

    #[tokio::test]
    async fn network_failure_degrades_to_empty() {
        let provider = HttpSuggestionProvider::new("http://127.0.0.1:9").unwrap();
        let resolver = SuggestResolver::new(HttpClient::new().unwrap(), Arc::new(provider));
        assert!(resolver.suggestions("carla").await.is_empty());
    }

    #[tokio::test]
    async fn malformed_payloads_degrade_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suggest"))
            .and(query_param("term", "carla"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/suggest"))
            .and(query_param("term", "carlos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let resolver = resolver_for(&server);
        assert!(resolver.suggestions("carla").await.is_empty());
        assert!(resolver.suggestions("carlos").await.is_empty());
    }

    #[tokio::test]
    async fn malformed_elements_are_filtered_not_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suggest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"text": "A", "type": "filme"},
                {"text": "B"},
                null,
                {"text": "C", "type": "ator", "extra": 1},
            ])))
            .mount(&server)
            .await;

        let resolver = resolver_for(&server);
        let suggestions = resolver.suggestions("carla").await;
        assert_eq!(
            suggestions,
            vec![Suggestion::new("A", "filme"), Suggestion::new("C", "ator")]
        );
    }

    #[tokio::test]
    async fn four_char_term_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suggest"))
            .and(query_param("term", "carl"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"text": "Carla", "type": "atriz"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let resolver = resolver_for(&server);
        let suggestions = resolver.suggestions("carl").await;
        assert_eq!(suggestions, vec![Suggestion::new("Carla", "atriz")]);
    }
}
