//! Heuristic counterparty extraction from statement free text.
//!
//! An ordered cascade, first hit returned. Best-effort: precision is
//! secondary to always producing a non-empty, display-safe string.

use regex::Regex;
use std::sync::OnceLock;

/// Returned when nothing in the row names the other party.
pub const DEFAULT_COUNTERPARTY: &str = "Не указан";

fn legal_entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // prefix plus one name token: ТОО «Ромашка», ИП Иванов
        Regex::new(r#"\b(?:ИП|ТОО|АО|ООО)\s+[«"]?[А-ЯЁа-яёA-Za-z0-9.\-]+"#)
            .expect("legal entity regex")
    })
}

fn person_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // "Иванов Иван" or the initial form "Иванов И."
    RE.get_or_init(|| {
        Regex::new(r"[А-ЯЁ][а-яё]+\s+(?:[А-ЯЁ][а-яё]+|[А-ЯЁ]\.(?:\s?[А-ЯЁ]\.)?)")
            .expect("person name regex")
    })
}

fn brand_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Leading Latin brand/short name: "Magnum", "GLOVO", "WOLT-ALMATY"
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9&._\-]{2,}").expect("brand token regex"))
}

/// Extract a counterparty name from a transaction description, falling back
/// to the bank's operation label and finally to a fixed default.
pub fn extract_counterparty(description: &str, operation: Option<&str>) -> String {
    let lower = description.to_lowercase();

    // Self-transfers get fixed internal labels
    if lower.contains("свой депозит") || lower.contains("на депозит") {
        return "Kaspi Депозит".to_string();
    }
    if lower.contains("банкомат") {
        return "Kaspi Банкомат".to_string();
    }
    if lower.contains("через терминал") || lower.contains("в терминале") {
        return "Kaspi Терминал".to_string();
    }

    if let Some(m) = legal_entity_re().find(description) {
        return m
            .as_str()
            .trim_matches(|c: char| c == '«' || c == '»' || c == '"' || c.is_whitespace())
            .replace(['«', '»', '"'], "")
            .trim()
            .to_string();
    }

    if let Some(m) = person_name_re().find(description) {
        return m.as_str().trim().to_string();
    }

    if let Some(m) = brand_token_re().find(description.trim_start()) {
        return m.as_str().to_string();
    }

    let trimmed = description.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    if let Some(op) = operation {
        let op = op.trim();
        if !op.is_empty() {
            return op.to_string();
        }
    }
    DEFAULT_COUNTERPARTY.to_string()
}
