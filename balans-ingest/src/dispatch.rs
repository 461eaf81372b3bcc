//! File-type dispatch and bank identification for statement imports.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use balans_core::error::{Error, Result};
use balans_core::{Finalizer, Transaction};

use crate::parsers::{delimited, halyk, kaspi};
use crate::pdf::extract_pdf_text;
use crate::types::ParseOutput;

/// A recognizable bank statement layout. Supporting another bank is one more
/// implementation in `bank_profiles`, not a new dispatcher branch.
pub trait BankProfile: Sync {
    fn name(&self) -> &'static str;
    /// Substring sniff over the extracted text.
    fn matches(&self, text: &str) -> bool;
    fn parse(&self, text: &str) -> Result<ParseOutput>;
}

pub struct KaspiProfile;

impl BankProfile for KaspiProfile {
    fn name(&self) -> &'static str {
        "Kaspi"
    }

    fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("kaspi") || lower.contains("каспи")
    }

    fn parse(&self, text: &str) -> Result<ParseOutput> {
        kaspi::parse_kaspi_text(text)
    }
}

pub struct HalykProfile;

impl BankProfile for HalykProfile {
    fn name(&self) -> &'static str {
        "Halyk"
    }

    fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("halyk") || lower.contains("халык") || lower.contains("народный банк")
    }

    fn parse(&self, text: &str) -> Result<ParseOutput> {
        halyk::parse_halyk_text(text)
    }
}

/// Known statement layouts, in sniffing order.
pub fn bank_profiles() -> [&'static dyn BankProfile; 2] {
    [&KaspiProfile, &HalykProfile]
}

/// Unknown layouts fall back to the Kaspi parser.
fn identify_bank(text: &str) -> &'static dyn BankProfile {
    for profile in bank_profiles() {
        if profile.matches(text) {
            return profile;
        }
    }
    &KaspiProfile
}

/// Import one statement file: dispatch by extension, parse, then run every
/// raw row through the single finalization stage.
///
/// `progress` receives human-readable status lines at each phase.
pub fn process_statement(
    path: &Path,
    mut progress: impl FnMut(&str),
) -> Result<Vec<Transaction>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let output = match extension.as_str() {
        "csv" => {
            progress("Чтение файла...");
            let text = fs::read_to_string(path)?;
            delimited::parse_delimited(&text)?
        }
        "pdf" => {
            progress("Чтение файла...");
            let text = extract_pdf_text(path, &mut progress)?;
            let profile = identify_bank(&text);
            info!(bank = profile.name(), "распознан формат выписки");
            progress(&format!("Распознавание операций ({})...", profile.name()));
            profile.parse(&text)?
        }
        other => return Err(Error::UnsupportedFormat(other.to_string())),
    };

    for skip in &output.skipped {
        debug!(line = skip.line, reason = %skip.reason, "строка пропущена");
    }
    if !output.skipped.is_empty() {
        info!(count = output.skipped.len(), "пропущены нераспознанные строки");
    }

    progress("Категоризация операций...");
    let finalizer = Finalizer::new();
    Ok(output
        .entries
        .iter()
        .map(|e| finalizer.finalize(e.date, &e.description, e.amount, e.operation.as_deref()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = process_statement(Path::new("statement.docx"), |_| {}).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ext) if ext == "docx"));
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        let err = process_statement(Path::new("statement"), |_| {}).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_bank_sniffing() {
        assert_eq!(identify_bank("выписка АО «Kaspi Bank»").name(), "Kaspi");
        assert_eq!(identify_bank("Halyk Bank statement").name(), "Halyk");
        assert_eq!(identify_bank("Народный Банк Казахстана").name(), "Halyk");
        // unknown layout falls back to Kaspi
        assert_eq!(identify_bank("неизвестный банк").name(), "Kaspi");
    }

    #[test]
    fn test_extension_dispatch_is_case_insensitive() {
        // a missing .CSV file must fail on IO, not on format detection
        let err = process_statement(Path::new("/nonexistent/statement.CSV"), |_| {}).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
