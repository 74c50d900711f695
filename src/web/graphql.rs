//! GraphQL query layer
//!
//! One object type and one query, matching the contract the presentation
//! layer consumes:
//!
//! ```graphql
//! type Suggestion { text: String!, type: String! }
//! type Query { suggestions(term: String!): [Suggestion!]! }
//! ```

use crate::suggest::{SuggestResolver, Suggestion};
use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
use std::sync::Arc;

/// The complete GraphQL schema type
pub type SuggestSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Root query object
pub struct QueryRoot {
    resolver: Arc<SuggestResolver>,
}

#[Object]
impl QueryRoot {
    /// Ranked suggestions for a search term
    ///
    /// The field is total: upstream failures degrade to an empty list and
    /// never surface as a GraphQL error.
    async fn suggestions(&self, term: String) -> Vec<Suggestion> {
        self.resolver.suggestions(&term).await
    }
}

/// Build the GraphQL schema around a resolver
pub fn build_schema(resolver: Arc<SuggestResolver>) -> SuggestSchema {
    Schema::build(QueryRoot { resolver }, EmptyMutation, EmptySubscription)
        .limit_depth(8)
        .limit_complexity(64)
        .finish()
}
