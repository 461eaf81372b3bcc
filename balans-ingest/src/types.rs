//! Normalized parser output (bank-agnostic), before categorization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A raw statement row. Category, cash-flow section, and the capitalization
/// flag are assigned later by the finalizer, never by parsers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementEntry {
    pub date: NaiveDate,
    /// Raw line-item text, kept verbatim.
    pub description: String,
    /// Positive = credited to the account; negative = debited.
    pub amount: f64,
    /// The bank's operation label ("Покупка", "Перевод", ...) when present.
    pub operation: Option<String>,
}

/// Per-row parse result. Skips carry their reason so tests and logs can see
/// why a line was dropped instead of it disappearing silently.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Matched(StatementEntry),
    Skipped(SkippedRow),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line (or record) number within the parsed document.
    pub line: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Fewer fields than the header row; continuation or noise line.
    ShortRow { fields: usize, expected: usize },
    BadDate(String),
    BadAmount(String),
    /// Line inside the transaction table that matches no row pattern.
    NoMatch,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::ShortRow { fields, expected } => {
                write!(f, "короткая строка: {fields} полей из {expected}")
            }
            SkipReason::BadDate(raw) => write!(f, "нераспознанная дата: «{raw}»"),
            SkipReason::BadAmount(raw) => write!(f, "нераспознанная сумма: «{raw}»"),
            SkipReason::NoMatch => write!(f, "строка не соответствует формату операции"),
        }
    }
}

/// Everything a parser extracted from one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutput {
    pub entries: Vec<StatementEntry>,
    pub skipped: Vec<SkippedRow>,
}

impl ParseOutput {
    pub fn push(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Matched(entry) => self.entries.push(entry),
            RowOutcome::Skipped(row) => self.skipped.push(row),
        }
    }
}
