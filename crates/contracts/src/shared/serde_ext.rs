//! Lenient deserializers for identifiers.
//!
//! The ledger API hands out ids as strings, but some deployments emit
//! numeric ids. The client treats ids as opaque text either way.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Integer(value) => value.to_string(),
        }
    }
}

/// Accepts `"42"` or `42`.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Accepts `"42"`, `42`, `null` or a missing field (with `#[serde(default)]`).
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "super::id")]
        id: String,
        #[serde(default, deserialize_with = "super::optional_id")]
        parent: Option<String>,
    }

    #[test]
    fn test_numeric_and_text_ids() {
        let holder: Holder = serde_json::from_str(r#"{"id": 17, "parent": "p-1"}"#).unwrap();
        assert_eq!(holder.id, "17");
        assert_eq!(holder.parent.as_deref(), Some("p-1"));

        let holder: Holder = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(holder.id, "abc");
        assert_eq!(holder.parent, None);

        let holder: Holder = serde_json::from_str(r#"{"id": "abc", "parent": null}"#).unwrap();
        assert_eq!(holder.parent, None);
    }
}
