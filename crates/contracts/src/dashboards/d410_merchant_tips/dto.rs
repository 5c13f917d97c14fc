use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count and amount of tips in one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTotals {
    #[serde(default)]
    pub count: u64,
    /// Sum in minor units (fils)
    #[serde(rename = "totalAmountFils", default)]
    pub total_amount_minor_units: u64,
}

/// Totals keyed by status label ("pending", "settled", ...).
///
/// Ordered map so the summary renders in a stable order.
pub type TipSummary = BTreeMap<String, StatusTotals>;

/// Response of `GET /merchants/{id}/tips/summary`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantSummaryResponse {
    #[serde(
        rename = "merchantId",
        default,
        deserialize_with = "crate::shared::serde_ext::optional_id"
    )]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub summary: TipSummary,
}

/// Sums every status of a summary into one row.
pub fn summary_totals(summary: &TipSummary) -> StatusTotals {
    summary
        .values()
        .fold(StatusTotals::default(), |acc, totals| StatusTotals {
            count: acc.count.saturating_add(totals.count),
            total_amount_minor_units: acc
                .total_amount_minor_units
                .saturating_add(totals.total_amount_minor_units),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary() {
        let raw = r#"{
            "merchantId": "m1",
            "summary": {
                "settled": {"count": 3, "totalAmountFils": 4500},
                "pending": {"count": 1, "totalAmountFils": 250}
            }
        }"#;
        let response: MerchantSummaryResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.merchant_id.as_deref(), Some("m1"));
        let statuses: Vec<&str> = response.summary.keys().map(String::as_str).collect();
        assert_eq!(statuses, vec!["pending", "settled"]);

        let totals = summary_totals(&response.summary);
        assert_eq!(totals.count, 4);
        assert_eq!(totals.total_amount_minor_units, 4750);
    }

    #[test]
    fn test_empty_summary() {
        let response: MerchantSummaryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.summary.is_empty());
        assert_eq!(summary_totals(&response.summary), StatusTotals::default());
    }
}
