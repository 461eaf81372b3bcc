//! The single finalization stage of the import pipeline.
//!
//! Every parser emits raw rows; exactly one place turns them into canonical
//! `Transaction` records, regardless of source format.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::category::Category;
use crate::classifier::Classifier;
use crate::counterparty::extract_counterparty;
use crate::transaction::{Transaction, TxKind};

/// Assigns id, direction, counterparty, category, cash-flow section, and the
/// capitalization flag to raw statement rows.
#[derive(Debug, Default, Clone)]
pub struct Finalizer {
    classifier: Classifier,
}

impl Finalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Finalize one raw row. `signed_amount` keeps the statement's sign:
    /// positive is money in, negative is money out.
    pub fn finalize(
        &self,
        date: NaiveDate,
        description: &str,
        signed_amount: f64,
        operation: Option<&str>,
    ) -> Transaction {
        let kind = if signed_amount < 0.0 {
            TxKind::Expense
        } else {
            TxKind::Income
        };
        let counterparty = extract_counterparty(description, operation);
        let category =
            self.classifier
                .classify(description, &counterparty, operation.unwrap_or(""));

        Transaction {
            id: Uuid::new_v4().to_string(),
            date,
            description: description.to_string(),
            amount: signed_amount.abs(),
            kind,
            category,
            counterparty,
            flow: category.flow(),
            is_capitalized: category == Category::Equipment,
            needs_clarification: false,
        }
    }
}
