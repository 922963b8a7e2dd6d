//! lopdf-backed page source for payslip PDFs.

use std::path::Path;

use lopdf::Document;
use meisai_core::ReadError;

use crate::source::{PageSource, PageText};

/// Reads payslip PDFs from disk, decrypting with the configured password
/// when the document is protected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfSource;

fn short_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl PageSource for PdfSource {
    fn pages(&self, path: &Path, password: Option<&str>) -> Result<Vec<PageText>, ReadError> {
        let filename = short_name(path);

        if !path.exists() {
            return Err(ReadError::DocumentNotFound { filename });
        }

        let mut doc = Document::load(path).map_err(|e| ReadError::Document {
            filename: filename.clone(),
            reason: e.to_string(),
        })?;

        if doc.is_encrypted() {
            doc.decrypt(password.unwrap_or(""))
                .map_err(|e| ReadError::Document {
                    filename: filename.clone(),
                    reason: format!("復号に失敗しました ({e})"),
                })?;
        }

        let mut pages = Vec::new();
        for (number, _) in doc.get_pages() {
            let text = doc
                .extract_text(&[number])
                .map_err(|e| ReadError::Document {
                    filename: filename.clone(),
                    reason: format!("{number}ページ目のテキスト抽出に失敗しました ({e})"),
                })?;
            pages.push(PageText::Text(text));
        }

        Ok(pages)
    }
}
