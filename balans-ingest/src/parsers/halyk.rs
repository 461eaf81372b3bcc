//! Halyk statement parser (PDF-extracted text).
//!
//! No reliable table marker in these extractions; instead, any line carrying
//! a `DD.MM.YYYY` date opens a transaction, and the signed amount with a
//! currency token sits on the same line or the next one:
//!
//!   03.02.2024 Оплата поставщику ТОО «Алатау»
//!   -120 000,00 KZT
//!   05.02.2024 +540 000,00 KZT Поступление от АО «Береке»
//!
//! The description is the residual text after the date and amount tokens are
//! removed, falling back to the next line's residual.

use regex::Regex;

use balans_core::error::{Error, Result};

use crate::fields::{parse_amount, parse_flex_date};
use crate::types::{ParseOutput, SkipReason, SkippedRow, StatementEntry};

const FALLBACK_DESCRIPTION: &str = "Без описания";

/// Parse Halyk statement text into raw entries.
pub fn parse_halyk_text(text: &str) -> Result<ParseOutput> {
    let date_re = Regex::new(r"\d{2}\.\d{2}\.\d{4}")?;
    let amount_re = Regex::new(
        r"(?P<sign>[+-])?\s*(?P<amt>\d[\d\s\u{00a0}\u{202f}]*[.,]\d{2})\s*(?:₸|KZT|тг\.?)",
    )?;

    let lines: Vec<&str> = text.lines().collect();
    let mut out = ParseOutput::default();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let Some(date_match) = date_re.find(line) else {
            i += 1;
            continue;
        };

        let Some(date) = parse_flex_date(date_match.as_str()) else {
            out.skipped.push(SkippedRow {
                line: i + 1,
                reason: SkipReason::BadDate(date_match.as_str().to_string()),
            });
            i += 1;
            continue;
        };

        // Amount on the date line, else on the next line
        let (caps, amount_line) = match amount_re.captures(line) {
            Some(c) => (c, i),
            None => match lines.get(i + 1).and_then(|l| amount_re.captures(l)) {
                Some(c) => (c, i + 1),
                None => {
                    out.skipped.push(SkippedRow {
                        line: i + 1,
                        reason: SkipReason::NoMatch,
                    });
                    i += 1;
                    continue;
                }
            },
        };

        let Some(magnitude) = parse_amount(&caps["amt"]) else {
            out.skipped.push(SkippedRow {
                line: i + 1,
                reason: SkipReason::BadAmount(caps["amt"].to_string()),
            });
            i += 1;
            continue;
        };
        let amount = match caps.name("sign").map(|m| m.as_str()) {
            Some("-") => -magnitude,
            _ => magnitude,
        };

        let matched_amount = &caps[0];
        let mut description = line.replace(date_match.as_str(), "");
        if amount_line == i {
            description = description.replace(matched_amount, "");
        }
        let mut description = description.trim().to_string();
        if description.is_empty() && amount_line == i + 1 {
            description = lines[amount_line].replace(matched_amount, "").trim().to_string();
        }
        if description.is_empty() {
            description = FALLBACK_DESCRIPTION.to_string();
        }

        out.entries.push(StatementEntry {
            date,
            description,
            amount,
            operation: None,
        });
        i = amount_line + 1;
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

    #[test]
    fn test_amount_on_same_line() {
        let text = "05.02.2024 +540 000,00 KZT Поступление от АО «Береке»\n";
        let out = parse_halyk_text(text).unwrap();
        assert_eq!(out.entries.len(), 1);

        let entry = &out.entries[0];
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 2, 5).unwrap());
        assert_eq!(entry.amount, 540_000.0);
        assert_eq!(entry.description, "Поступление от АО «Береке»");
    }

    #[test]
    fn test_amount_on_next_line() {
        let text = "03.02.2024 Оплата поставщику ТОО «Алатау»\n-120 000,00 KZT\n";
        let out = parse_halyk_text(text).unwrap();
        assert_eq!(out.entries.len(), 1);

        let entry = &out.entries[0];
        assert_eq!(entry.amount, -120_000.0);
        assert_eq!(entry.description, "Оплата поставщику ТОО «Алатау»");
    }

    #[test]
    fn test_description_falls_back_to_next_line_residual() {
        let text = "03.02.2024\n-120 000,00 KZT Оплата поставщику\n";
        let out = parse_halyk_text(text).unwrap();
        assert_eq!(out.entries.len(), 1);
        assert_eq!(out.entries[0].description, "Оплата поставщику");
    }

    #[test]
    fn test_mixed_document() {
        let text = "\
Народный Банк Казахстана, выписка
03.02.2024 Оплата поставщику ТОО «Алатау»
-120 000,00 KZT
промежуточный остаток 1 000,00
05.02.2024 +540 000,00 KZT Поступление от АО «Береке»
";
        let out = parse_halyk_text(text).unwrap();
        assert_eq!(out.entries.len(), 2);
        assert_eq!(out.entries[0].amount, -120_000.0);
        assert_eq!(out.entries[1].amount, 540_000.0);
    }

    #[test]
    fn test_date_without_amount_is_skipped() {
        let text = "\
03.02.2024 строка без суммы
другая строка без суммы
05.02.2024 +540 000,00 KZT Поступление
";
        let out = parse_halyk_text(text).unwrap();
        assert_eq!(out.entries.len(), 1);
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].reason, SkipReason::NoMatch);
    }

    #[test]
    fn test_no_transactions_is_structural() {
        assert!(matches!(
            parse_halyk_text("никаких операций здесь нет\n"),
            Err(Error::NoTransactions)
        ));
    }
}
