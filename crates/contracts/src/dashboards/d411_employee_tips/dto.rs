use serde::{Deserialize, Serialize};

/// One movement in an employee's tip ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipLedgerEntry {
    #[serde(deserialize_with = "crate::shared::serde_ext::id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount in minor units (fils)
    #[serde(rename = "amountFils")]
    pub amount_minor_units: u64,
    /// RFC 3339 timestamp as sent by the server
    pub created_at: String,
    #[serde(deserialize_with = "crate::shared::serde_ext::id")]
    pub tip_intent_id: String,
    #[serde(default)]
    pub table_code: Option<String>,
    #[serde(rename = "name", default)]
    pub employee_name: Option<String>,
}

/// Response of `GET /employees/{id}/tips`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTipsResponse {
    #[serde(default, deserialize_with = "crate::shared::serde_ext::optional_id")]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::serde_ext::optional_id")]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub entries: Vec<TipLedgerEntry>,
}

impl EmployeeTipsResponse {
    /// Sum of the listed entries. The server's `total` is authoritative; this
    /// is only meaningful when the response carries the full ledger.
    pub fn entries_total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.amount_minor_units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ledger() {
        let raw = r#"{
            "employeeId": "e1",
            "merchantId": "m1",
            "total": 1750,
            "entries": [
                {"id": "l1", "type": "tip", "amountFils": 1500, "createdAt": "2024-03-15T14:02:26Z",
                 "tipIntentId": "ti-1", "tableCode": "T-1", "name": "Sara"},
                {"id": "l2", "type": "tip", "amountFils": 250, "createdAt": "2024-03-16T09:00:00Z",
                 "tipIntentId": "ti-2"}
            ]
        }"#;
        let response: EmployeeTipsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.total, 1750);
        assert_eq!(response.entries_total(), response.total);
        assert_eq!(response.entries[0].kind, "tip");
        assert_eq!(response.entries[0].table_code.as_deref(), Some("T-1"));
        assert_eq!(response.entries[0].employee_name.as_deref(), Some("Sara"));
        assert_eq!(response.entries[1].table_code, None);
        assert_eq!(response.entries[1].employee_name, None);
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let raw = r#"{"total": 0, "entries": [
            {"id": "l1", "type": "tip", "amountFils": -5, "createdAt": "x", "tipIntentId": "t"}
        ]}"#;
        assert!(serde_json::from_str::<EmployeeTipsResponse>(raw).is_err());
    }
}
