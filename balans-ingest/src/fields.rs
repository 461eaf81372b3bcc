//! Field-level parsing shared by all statement parsers: dates in the formats
//! banks actually export, and amounts with currency noise attached.

use chrono::NaiveDate;

/// Parse `YYYY-MM-DD`, `DD.MM.YYYY`, or `DD.MM.YY`, with `.`, `-`, or `/` as
/// the separator. Two-digit years pivot at 50: `<50` is 2000s, the rest 1900s.
pub fn parse_flex_date(raw: &str) -> Option<NaiveDate> {
    let normalized: String = raw
        .trim()
        .chars()
        .map(|c| if c == '-' || c == '/' { '.' } else { c })
        .collect();
    let parts: Vec<&str> = normalized.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let nums: Vec<i32> = parts
        .iter()
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<_, _>>()
        .ok()?;

    let (year, month, day) = if parts[0].len() == 4 {
        (nums[0], nums[1], nums[2])
    } else if parts[2].len() == 4 {
        (nums[2], nums[1], nums[0])
    } else {
        let yy = nums[2];
        let year = if yy < 50 { 2000 + yy } else { 1900 + yy };
        (year, nums[1], nums[0])
    };

    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// Parse an amount with currency symbols, thousands separators, and either
/// decimal comma or decimal period: `- 15 000,00 ₸`, `1,234.56`, `300000`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | ','))
        .collect();
    // currency tokens like "тг." leave dangling separators behind
    let mut cleaned = filtered.trim_matches(|c| c == '.' || c == ',').to_string();
    if cleaned.is_empty() {
        return None;
    }

    // When both separators appear, the later one is the decimal point
    if cleaned.contains('.') && cleaned.contains(',') {
        if cleaned.rfind(',') > cleaned.rfind('.') {
            cleaned = cleaned.replace('.', "");
        } else {
            cleaned = cleaned.replace(',', "");
        }
    }
    let cleaned = cleaned.replace(',', ".");
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_flex_date("2024-01-15"), Some(d(2024, 1, 15)));
        assert_eq!(parse_flex_date("2024.01.15"), Some(d(2024, 1, 15)));
        assert_eq!(parse_flex_date("2024/01/15"), Some(d(2024, 1, 15)));
    }

    #[test]
    fn test_day_first_dates() {
        assert_eq!(parse_flex_date("15.01.2024"), Some(d(2024, 1, 15)));
        assert_eq!(parse_flex_date("15/01/2024"), Some(d(2024, 1, 15)));
        assert_eq!(parse_flex_date("15-01-2024"), Some(d(2024, 1, 15)));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_flex_date("15.01.24"), Some(d(2024, 1, 15)));
        assert_eq!(parse_flex_date("15.01.49"), Some(d(2049, 1, 15)));
        assert_eq!(parse_flex_date("15.01.50"), Some(d(1950, 1, 15)));
        assert_eq!(parse_flex_date("15.01.99"), Some(d(1999, 1, 15)));
    }

    #[test]
    fn test_bad_dates() {
        assert_eq!(parse_flex_date(""), None);
        assert_eq!(parse_flex_date("32.01.2024"), None);
        assert_eq!(parse_flex_date("15.13.2024"), None);
        assert_eq!(parse_flex_date("Аренда"), None);
        assert_eq!(parse_flex_date("2024-01"), None);
    }

    #[test]
    fn test_plain_amounts() {
        assert_eq!(parse_amount("300000"), Some(300_000.0));
        assert_eq!(parse_amount("-150000"), Some(-150_000.0));
        assert_eq!(parse_amount("+150.50"), Some(150.5));
    }

    #[test]
    fn test_currency_and_spaces() {
        assert_eq!(parse_amount("- 15 000,00 ₸"), Some(-15_000.0));
        assert_eq!(parse_amount("540 000,00 KZT"), Some(540_000.0));
        assert_eq!(parse_amount("1 234,56 тг."), Some(1_234.56));
        assert_eq!(parse_amount("\u{a0}2\u{a0}500,00"), Some(2_500.0));
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(parse_amount("1.234,56"), Some(1_234.56));
        assert_eq!(parse_amount("1,234.56"), Some(1_234.56));
    }

    #[test]
    fn test_bad_amounts() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("Описание"), None);
        assert_eq!(parse_amount("--"), None);
    }
}
