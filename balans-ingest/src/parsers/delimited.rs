//! Delimited-text (CSV) statement parser for exports with unpredictable
//! headers.
//!
//! The header row is searched among the first 5 records by bilingual column
//! synonyms; the separator is inferred per candidate line (`;` if present,
//! else `,`). Rows shorter than the header are treated as continuation noise
//! and skipped with a reason.

use csv::ReaderBuilder;

use balans_core::error::{Error, Result};

use crate::fields::{parse_amount, parse_flex_date};
use crate::types::{ParseOutput, RowOutcome, SkipReason, SkippedRow, StatementEntry};

const HEADER_SCAN_LINES: usize = 5;

const DATE_HEADERS: &[&str] = &["дата", "date"];
const DESCRIPTION_HEADERS: &[&str] = &[
    "описание",
    "назначение",
    "детали",
    "наименование",
    "description",
    "details",
    "narrative",
];
const AMOUNT_HEADERS: &[&str] = &["сумма", "amount"];

#[derive(Debug, Clone, Copy)]
struct HeaderLayout {
    row: usize,
    separator: u8,
    date: usize,
    description: usize,
    amount: usize,
    width: usize,
}

fn matches_any(cell: &str, synonyms: &[&str]) -> bool {
    let cell = cell.trim().to_lowercase();
    synonyms.iter().any(|s| cell.contains(s))
}

fn find_column(cells: &[&str], synonyms: &[&str], taken: &[usize]) -> Option<usize> {
    cells
        .iter()
        .enumerate()
        .find(|(i, cell)| !taken.contains(i) && matches_any(cell, synonyms))
        .map(|(i, _)| i)
}

/// Scan the first 5 lines for a row carrying all three semantic columns.
/// The separator is inferred per candidate line: `;` if present, else `,`.
fn find_header(text: &str) -> Option<HeaderLayout> {
    for (row, line) in text.lines().take(HEADER_SCAN_LINES).enumerate() {
        let separator = if line.contains(';') { b';' } else { b',' };
        let cells: Vec<&str> = line.split(separator as char).collect();

        let Some(date) = find_column(&cells, DATE_HEADERS, &[]) else {
            continue;
        };
        let Some(description) = find_column(&cells, DESCRIPTION_HEADERS, &[date]) else {
            continue;
        };
        let Some(amount) = find_column(&cells, AMOUNT_HEADERS, &[date, description]) else {
            continue;
        };
        return Some(HeaderLayout {
            row,
            separator,
            date,
            description,
            amount,
            width: cells.len(),
        });
    }
    None
}

fn parse_row(line: usize, cells: &[String], header: &HeaderLayout) -> RowOutcome {
    if cells.len() < header.width {
        return RowOutcome::Skipped(SkippedRow {
            line,
            reason: SkipReason::ShortRow {
                fields: cells.len(),
                expected: header.width,
            },
        });
    }

    let date_raw = cells[header.date].trim();
    let Some(date) = parse_flex_date(date_raw) else {
        return RowOutcome::Skipped(SkippedRow {
            line,
            reason: SkipReason::BadDate(date_raw.to_string()),
        });
    };

    let amount_raw = cells[header.amount].trim();
    let Some(amount) = parse_amount(amount_raw) else {
        return RowOutcome::Skipped(SkippedRow {
            line,
            reason: SkipReason::BadAmount(amount_raw.to_string()),
        });
    };

    RowOutcome::Matched(StatementEntry {
        date,
        description: cells[header.description].trim().to_string(),
        amount,
        operation: None,
    })
}

/// Parse delimited statement text into raw entries.
///
/// Structural failures: no header row within the first 5 lines, or zero
/// entries out of a non-empty table.
pub fn parse_delimited(text: &str) -> Result<ParseOutput> {
    let header = find_header(text).ok_or(Error::HeaderNotFound)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(header.separator)
        .flexible(true)
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(|c| c.to_string()).collect());
    }

    let mut out = ParseOutput::default();
    for (idx, cells) in records.iter().enumerate().skip(header.row + 1) {
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        out.push(parse_row(idx + 1, cells, &header));
    }

    if out.entries.is_empty() {
        return Err(Error::NoTransactions);
    }
    Ok(out)
}
