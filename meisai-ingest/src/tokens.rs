//! Whitespace tokenization of page-ordered document text.

use std::borrow::Cow;

use crate::source::PageText;

/// Flatten pages into a single ordered token sequence.
///
/// Each page is split on runs of whitespace and the page results are
/// concatenated in page order. Duplicate tokens are kept; the same label
/// can legitimately appear at several positions.
pub fn flatten_tokens(pages: &[PageText]) -> Vec<String> {
    let mut tokens = Vec::new();
    for page in pages {
        let text: Cow<'_, str> = match page {
            PageText::Text(text) => Cow::Borrowed(text.as_str()),
            PageText::Raw(bytes) => String::from_utf8_lossy(bytes),
        };
        tokens.extend(text.split_whitespace().map(str::to_string));
    }
    tokens
}
