//! Client-side error taxonomy.
//!
//! Every failure the client can meet ends up as one of these variants; views
//! only ever show [`ClientError::user_message`].

use contracts::domain::a102_dining_table::TableCodeError;
use contracts::system::auth::MalformedAuth;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Non-2xx response. `message` is the normalized server text, if any.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// A client-side precondition failed before any request was made.
    #[error("{0}")]
    Validation(String),
    /// 2xx response without the fields the client needs.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ClientError {
    /// 401/403 from an authorized endpoint.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Rejected { status: 401 | 403, .. })
    }

    /// The single string shown to the user: server text when present,
    /// validation text as is, the operation's fallback otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<TableCodeError> for ClientError {
    fn from(err: TableCodeError) -> Self {
        ClientError::Validation(err.to_string())
    }
}

impl From<MalformedAuth> for ClientError {
    fn from(err: MalformedAuth) -> Self {
        ClientError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let rejected = ClientError::Rejected {
            status: 409,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(rejected.user_message("Failed"), "Email already registered");

        let bare = ClientError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(bare.user_message("Failed to create table"), "Failed to create table");

        let transport = ClientError::Transport("Failed to fetch".to_string());
        assert_eq!(transport.user_message("Auth failed"), "Auth failed");

        let invalid: ClientError = TableCodeError::TooShort.into();
        assert_eq!(
            invalid.user_message("ignored"),
            "Table code must be at least 2 characters long"
        );
    }

    #[test]
    fn test_unauthorized() {
        for status in [401, 403] {
            assert!(ClientError::Rejected {
                status,
                message: None
            }
            .is_unauthorized());
        }
        assert!(!ClientError::Rejected {
            status: 404,
            message: None
        }
        .is_unauthorized());
        assert!(!ClientError::Transport("x".to_string()).is_unauthorized());
    }
}
