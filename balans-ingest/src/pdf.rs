//! PDF text extraction for statement imports.
//!
//! Pages are processed strictly in document order: the parsers' header and
//! date-continuity heuristics depend on it.

use std::path::Path;

use balans_core::error::{Error, Result};

/// Extract the text layer of a PDF, reporting per-page progress.
///
/// Fails when the document has no text layer (scanned images).
pub fn extract_pdf_text(path: &Path, mut progress: impl FnMut(&str)) -> Result<String> {
    let full = pdf_extract::extract_text(path).map_err(|e| Error::Pdf(e.to_string()))?;

    let pages: Vec<&str> = full
        .split('\u{000C}')
        .filter(|page| !page.trim().is_empty())
        .collect();
    if pages.is_empty() {
        return Err(Error::Pdf(
            "в документе нет текстового слоя (отсканированное изображение?)".to_string(),
        ));
    }

    let total = pages.len();
    let mut text = String::new();
    for (index, page) in pages.iter().enumerate() {
        progress(&format!("Извлечение текста: страница {}/{}", index + 1, total));
        text.push_str(page);
        text.push('\n');
    }
    Ok(text)
}
