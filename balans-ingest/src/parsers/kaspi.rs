//! Kaspi statement parser (PDF-extracted text).
//!
//! Extraction collapses the PDF layout, so rows arrive wrapped and mixed
//! with page boilerplate. Expected shape after normalization:
//!
//!   Дата Сумма Операция Детали
//!   02.06.24 - 15 000,00 ₸ Покупка Magnum Cash&Carry
//!   03.06.24 + 250 000,00 ₸ Пополнение Оплата от ТОО «Ромашка»
//!
//! Parsing activates only after the table-header marker; lines before it are
//! statement boilerplate, lines after it that match no row pattern are
//! skipped with a reason.

use regex::Regex;

use balans_core::error::{Error, Result};

use crate::fields::{parse_amount, parse_flex_date};
use crate::types::{ParseOutput, SkipReason, SkippedRow, StatementEntry};

/// Page header/footer fragments dropped before row matching.
const BOILERPLATE: &[&str] = &[
    "выписка по счету",
    "kaspi gold",
    "kaspi bank",
    "kaspi.kz",
    "за период",
    "итого по операциям",
    "доступно на",
    "остаток на",
    "стр.",
];

/// Strip boilerplate, then re-break the text so every `DD.MM.YY` token opens
/// a line: visually wrapped rows become single parseable lines.
fn normalize_text(text: &str) -> Result<String> {
    let date_break_re = Regex::new(r"(\d{2}\.\d{2}\.\d{2})(\s)")?;

    let kept: Vec<&str> = text
        .lines()
        .filter(|line| {
            let lower = line.trim().to_lowercase();
            !lower.is_empty() && !BOILERPLATE.iter().any(|b| lower.contains(b))
        })
        .collect();

    Ok(date_break_re
        .replace_all(&kept.join(" "), "\n$1$2")
        .into_owned())
}

/// Parse Kaspi statement text into raw entries.
pub fn parse_kaspi_text(text: &str) -> Result<ParseOutput> {
    let header_re = Regex::new(r"(?i)дата\s+сумма\s+операция\s+детали")?;
    let row_re = Regex::new(concat!(
        r"^(?P<date>\d{2}\.\d{2}\.\d{2})\s+",
        r"(?P<sign>[+-])\s*",
        r"(?P<amt>\d[\d\s\u{00a0}\u{202f}]*(?:[.,]\d{1,2})?)\s*",
        r"(?:₸|KZT|тг\.?)\s+",
        r"(?P<op>\S+)",
        r"(?:\s+(?P<details>.*))?$",
    ))?;

    let normalized = normalize_text(text)?;

    let mut in_table = false;
    let mut out = ParseOutput::default();
    for (idx, raw_line) in normalized.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if !in_table {
            if header_re.is_match(line) {
                in_table = true;
            }
            continue;
        }

        let Some(caps) = row_re.captures(line) else {
            out.skipped.push(SkippedRow {
                line: idx + 1,
                reason: SkipReason::NoMatch,
            });
            continue;
        };

        let Some(date) = parse_flex_date(&caps["date"]) else {
            out.skipped.push(SkippedRow {
                line: idx + 1,
                reason: SkipReason::BadDate(caps["date"].to_string()),
            });
            continue;
        };

        let Some(magnitude) = parse_amount(&caps["amt"]) else {
            out.skipped.push(SkippedRow {
                line: idx + 1,
                reason: SkipReason::BadAmount(caps["amt"].to_string()),
            });
            continue;
        };
        let amount = if &caps["sign"] == "-" {
            -magnitude
        } else {
            magnitude
        };

        let operation = caps["op"].to_string();
        let details = caps
            .name("details")
            .map(|m| m.as_str().trim())
            .unwrap_or("");
        let description = if details.is_empty() {
            operation.clone()
        } else {
            details.to_string()
        };

        out.entries.push(StatementEntry {
            date,
            description,
            amount,
            operation: Some(operation),
        });
    }

    if !in_table {
        return Err(Error::TableMarkerNotFound);
    }
    if out.entries.is_empty() {
        return Err(Error::NoTransactions);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = "\
АО «Kaspi Bank», kaspi.kz
Выписка по счету Kaspi Gold за период 01.06.2024 — 30.06.2024
Дата Сумма Операция Детали
02.06.24 - 15 000,00 ₸ Покупка Magnum Cash&Carry
03.06.24 + 250 000,00 ₸ Пополнение Оплата от ТОО «Ромашка»
04.06.24 - 5 000,00 ₸ Перевод Иванов Иван
";

    #[test]
    fn test_parses_rows_after_marker() {
        let out = parse_kaspi_text(SAMPLE).unwrap();
        assert_eq!(out.entries.len(), 3);

        let purchase = &out.entries[0];
        assert_eq!(purchase.date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(purchase.amount, -15_000.0);
        assert_eq!(purchase.operation.as_deref(), Some("Покупка"));
        assert_eq!(purchase.description, "Magnum Cash&Carry");

        let top_up = &out.entries[1];
        assert_eq!(top_up.amount, 250_000.0);
        assert_eq!(top_up.description, "Оплата от ТОО «Ромашка»");
    }

    #[test]
    fn test_unwraps_rows_broken_across_lines() {
        // PDF extraction wrapped the second row onto the first row's tail
        let text = "\
Дата Сумма Операция Детали
02.06.24 - 15 000,00 ₸ Покупка Magnum 03.06.24 + 250 000,00 ₸ Пополнение Оплата от клиента
";
        let out = parse_kaspi_text(text).unwrap();
        assert_eq!(out.entries.len(), 2);
        assert_eq!(out.entries[0].amount, -15_000.0);
        assert_eq!(out.entries[1].amount, 250_000.0);
    }

    #[test]
    fn test_wrapped_tail_merges_into_description() {
        let text = "\
Дата Сумма Операция Детали
02.06.24 - 15 000,00 ₸ Покупка Magnum
Cash&Carry Алматы
";
        let out = parse_kaspi_text(text).unwrap();
        assert_eq!(out.entries.len(), 1);
        assert_eq!(out.entries[0].description, "Magnum Cash&Carry Алматы");
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn test_missing_marker_is_structural() {
        let text = "02.06.24 - 15 000,00 ₸ Покупка Magnum\n";
        assert!(matches!(
            parse_kaspi_text(text),
            Err(Error::TableMarkerNotFound)
        ));
    }

    #[test]
    fn test_non_matching_lines_are_skipped_with_reason() {
        let text = "\
Дата Сумма Операция Детали
02.06.24 - 15 000,00 ₸ Покупка Magnum
02.06.24 справка по счету без суммы
";
        let out = parse_kaspi_text(text).unwrap();
        assert_eq!(out.entries.len(), 1);
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].reason, SkipReason::NoMatch);
    }

    #[test]
    fn test_marker_without_rows() {
        let text = "Дата Сумма Операция Детали\nшум\n";
        assert!(matches!(parse_kaspi_text(text), Err(Error::NoTransactions)));
    }

    #[test]
    fn test_boilerplate_lines_dropped() {
        let out = parse_kaspi_text(SAMPLE).unwrap();
        // the «за период» banner must not appear as a skipped row
        assert!(out.skipped.is_empty());
    }
}
