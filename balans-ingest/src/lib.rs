//! balans-ingest: statement parsing (delimited text and PDF-extracted text),
//! bank-profile dispatch, and the import pipeline entry point.

pub mod dispatch;
pub mod fields;
pub mod parsers;
pub mod pdf;
pub mod types;

pub use dispatch::{BankProfile, HalykProfile, KaspiProfile, bank_profiles, process_statement};
pub use types::{ParseOutput, RowOutcome, SkipReason, SkippedRow, StatementEntry};
