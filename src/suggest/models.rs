//! Suggestion record and payload sanitization

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One candidate match from the catalog
///
/// `kind` carries the upstream category label ("filme", "ator", "diretor",
/// ...) and is exposed on the wire as `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, SimpleObject)]
pub struct Suggestion {
    /// Display text of the match
    pub text: String,
    /// Category label, in upstream form
    #[serde(rename = "type")]
    #[graphql(name = "type")]
    pub kind: String,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
        }
    }

    /// Extract a suggestion from one upstream JSON element
    ///
    /// Returns `None` unless the element is an object with `text` and
    /// `type` both present as strings. Extra fields are discarded.
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let text = obj.get("text")?.as_str()?;
        let kind = obj.get("type")?.as_str()?;
        Some(Self::new(text, kind))
    }
}

/// Sanitize an upstream payload into the canonical suggestion list
///
/// A non-array payload yields an empty list. Within an array, malformed
/// elements are dropped whole and the upstream order of the survivors is
/// preserved.
pub fn sanitize(payload: &Value) -> Vec<Suggestion> {
    payload
        .as_array()
        .map(|arr| arr.iter().filter_map(Suggestion::from_value).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_drops_malformed_elements() {
        let payload = json!([
            {"text": "A", "type": "filme"},
            {"text": "B"},
            null,
            {"text": "C", "type": "ator", "extra": 1},
        ]);

        let suggestions = sanitize(&payload);
        assert_eq!(
            suggestions,
            vec![
                Suggestion::new("A", "filme"),
                Suggestion::new("C", "ator"),
            ]
        );
    }

    #[test]
    fn test_sanitize_rejects_non_string_fields() {
        let payload = json!([
            {"text": 42, "type": "filme"},
            {"text": "ok", "type": ["ator"]},
            {"text": "Central do Brasil", "type": "filme"},
        ]);

        let suggestions = sanitize(&payload);
        assert_eq!(suggestions, vec![Suggestion::new("Central do Brasil", "filme")]);
    }

    #[test]
    fn test_sanitize_preserves_upstream_order() {
        let payload = json!([
            {"text": "Cidade de Deus", "type": "filme"},
            {"text": "Carla Camurati", "type": "diretora"},
            {"text": "Carlota Joaquina", "type": "filme"},
        ]);

        let suggestions = sanitize(&payload);
        let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Cidade de Deus", "Carla Camurati", "Carlota Joaquina"]);
    }

    #[test]
    fn test_sanitize_non_array_payload() {
        assert!(sanitize(&json!({"text": "A", "type": "filme"})).is_empty());
        assert!(sanitize(&json!("carla")).is_empty());
        assert!(sanitize(&json!(null)).is_empty());
    }

    #[test]
    fn test_wire_shape_uses_type_field() {
        let suggestion = Suggestion::new("Carla", "atriz");
        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value, json!({"text": "Carla", "type": "atriz"}));

        let parsed: Suggestion = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, suggestion);
    }
}
