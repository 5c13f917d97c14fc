//! Error bodies returned by the ledger API.
//!
//! A failed request answers with `{"message": ...}` where `message` is a
//! plain string, a list of validation strings, or an object that nests the
//! real text one level deeper (`{"message": {"message": "..."}}`). Every call
//! site goes through [`normalize_message`] instead of probing the JSON itself.

use serde::{Deserialize, Serialize};

/// The `message` field of an error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiMessage {
    Text(String),
    List(Vec<String>),
    Nested { message: String },
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<ApiMessage>,
}

impl ApiErrorBody {
    /// Parses a raw response body. Anything that is not JSON yields an empty body.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Nested `message.message` wins over a flat `message`; blank text counts as absent.
    pub fn message(&self) -> Option<String> {
        let text = match self.message.as_ref()? {
            ApiMessage::Nested { message } => message.clone(),
            ApiMessage::Text(text) => text.clone(),
            ApiMessage::List(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
            ApiMessage::Other(_) => return None,
        };
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// Extracts the human-readable message from a raw error body, if it carries one.
pub fn normalize_message(raw: &str) -> Option<String> {
    ApiErrorBody::parse(raw).message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_message_preferred() {
        assert_eq!(
            normalize_message(r#"{"message": {"message": "Email already registered"}}"#),
            Some("Email already registered".to_string())
        );
    }

    #[test]
    fn test_flat_message() {
        assert_eq!(
            normalize_message(r#"{"message": "Invalid credentials", "statusCode": 401}"#),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn test_validation_list_is_joined() {
        assert_eq!(
            normalize_message(r#"{"message": ["email must be an email", "password too short"]}"#),
            Some("email must be an email; password too short".to_string())
        );
    }

    #[test]
    fn test_missing_or_unusable_message() {
        assert_eq!(normalize_message(""), None);
        assert_eq!(normalize_message("<html>Bad Gateway</html>"), None);
        assert_eq!(normalize_message(r#"{"error": "Forbidden"}"#), None);
        assert_eq!(normalize_message(r#"{"message": "   "}"#), None);
        assert_eq!(normalize_message(r#"{"message": {"code": 7}}"#), None);
    }
}
