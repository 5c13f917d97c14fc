use serde::{Deserialize, Serialize};

/// Minimum length of a table code.
pub const TABLE_CODE_MIN_LEN: usize = 2;

/// A table in the merchant's venue; customers tip against its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(deserialize_with = "crate::shared::serde_ext::id")]
    pub id: String,
    pub code: String,
}

/// Body of `POST /merchants/tables`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTableDto {
    pub code: String,
}

/// Reasons a table code is refused before it reaches the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableCodeError {
    #[error("Table code is required")]
    Required,
    #[error("Table code must be at least 2 characters long")]
    TooShort,
    #[error("Table code can only contain letters, numbers, dashes, or underscores")]
    InvalidCharacters,
}

fn is_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Checks a table code as typed. Rules apply in order and the first failure wins:
/// blank input, then length, then the `[A-Za-z0-9_-]` alphabet.
///
/// Only the emptiness check trims; length and alphabet look at the raw value,
/// which is also what gets posted.
pub fn validate_table_code(code: &str) -> Result<(), TableCodeError> {
    if code.trim().is_empty() {
        return Err(TableCodeError::Required);
    }
    if code.chars().count() < TABLE_CODE_MIN_LEN {
        return Err(TableCodeError::TooShort);
    }
    if !code.chars().all(is_code_char) {
        return Err(TableCodeError::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_in_order() {
        assert_eq!(validate_table_code(""), Err(TableCodeError::Required));
        assert_eq!(validate_table_code("   "), Err(TableCodeError::Required));
        assert_eq!(validate_table_code("a"), Err(TableCodeError::TooShort));
        assert_eq!(validate_table_code("a b"), Err(TableCodeError::InvalidCharacters));
        // Padding counts toward length, then fails the alphabet check.
        assert_eq!(validate_table_code(" a"), Err(TableCodeError::InvalidCharacters));
        assert_eq!(validate_table_code("T#1"), Err(TableCodeError::InvalidCharacters));
        assert_eq!(validate_table_code("Té"), Err(TableCodeError::InvalidCharacters));
    }

    #[test]
    fn test_valid_codes() {
        assert_eq!(validate_table_code("T-1"), Ok(()));
        assert_eq!(validate_table_code("patio_12"), Ok(()));
        assert_eq!(validate_table_code("AB"), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(TableCodeError::Required.to_string(), "Table code is required");
        assert_eq!(
            TableCodeError::TooShort.to_string(),
            "Table code must be at least 2 characters long"
        );
        assert_eq!(
            TableCodeError::InvalidCharacters.to_string(),
            "Table code can only contain letters, numbers, dashes, or underscores"
        );
    }
}
