//! Page-text acquisition capability.

use std::path::Path;

use meisai_core::ReadError;

/// Text extracted from one page.
///
/// Extractors may hand back decoded text or a raw byte block; raw blocks
/// are decoded as UTF-8 downstream, with invalid sequences replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageText {
    Text(String),
    Raw(Vec<u8>),
}

/// Opens a source document and yields its pages in page order.
///
/// One call reads the document to completion; nothing is retained across
/// calls. A missing file must surface as `ReadError::DocumentNotFound` so
/// the caller can name the expected filename to the user.
pub trait PageSource {
    fn pages(&self, path: &Path, password: Option<&str>) -> Result<Vec<PageText>, ReadError>;
}
