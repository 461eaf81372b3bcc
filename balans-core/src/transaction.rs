//! Canonical transaction record, immutable once finalized.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::{Category, FlowKind};

/// A fully categorized ledger entry. Produced by the finalizer, consumed by
/// the report generator and the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique id generated at parse time; no external identity exists.
    pub id: String,
    pub date: NaiveDate,
    /// Raw line-item text, kept verbatim for display and re-classification.
    pub description: String,
    /// Non-negative magnitude; the sign lives in `kind`.
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: Category,
    pub counterparty: String,
    #[serde(rename = "transactionType")]
    pub flow: FlowKind,
    #[serde(rename = "isCapitalized")]
    pub is_capitalized: bool,
    #[serde(rename = "needsClarification")]
    pub needs_clarification: bool,
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TxKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TxKind::Expense
    }

    /// Amount with direction restored: income positive, expense negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TxKind::Income => self.amount,
            TxKind::Expense => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            id: "t-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: "Аренда офиса".to_string(),
            amount: 150_000.0,
            kind: TxKind::Expense,
            category: Category::Rent,
            counterparty: "ТОО Ромашка".to_string(),
            flow: FlowKind::Operating,
            is_capitalized: false,
            needs_clarification: false,
        }
    }

    #[test]
    fn test_signed_amount() {
        let mut t = sample();
        assert_eq!(t.signed_amount(), -150_000.0);
        t.kind = TxKind::Income;
        assert_eq!(t.signed_amount(), 150_000.0);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["transactionType"], "operating");
        assert_eq!(json["isCapitalized"], false);
        assert_eq!(json["needsClarification"], false);
        assert_eq!(json["category"], "Аренда");
        assert_eq!(json["date"], "2024-01-15");
    }

    #[test]
    fn test_json_round_trip() {
        let t = sample();
        let json = serde_json::to_string(&t).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
