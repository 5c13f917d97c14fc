//! Responses of create endpoints.
//!
//! `POST /merchants/tables` and `POST /merchants/employees` return either the
//! bare entity or the entity wrapped under its own name. [`Created`] accepts
//! both and [`Created::into_inner`] is the single place that unwraps them.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Created<T> {
    Wrapped {
        #[serde(alias = "table", alias = "employee")]
        entity: T,
    },
    Bare(T),
}

impl<T> Created<T> {
    pub fn into_inner(self) -> T {
        match self {
            Created::Wrapped { entity } => entity,
            Created::Bare(entity) => entity,
        }
    }
}
