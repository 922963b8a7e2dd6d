//! Deduction line items and payslip amount-token parsing.

use std::fmt;

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};
use textwrap::core::display_width;

/// Half-width columns reserved for the item name in the console listing.
const NAME_COLUMNS: usize = 16;

/// A single named deduction with its amount and two-level category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionItem {
    /// Exact label as printed on the payslip.
    pub name: String,
    /// Signed whole yen.
    pub amount: i64,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl DeductionItem {
    pub fn new(name: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            amount,
            category: None,
            subcategory: None,
        }
    }

    pub fn with_categories(
        name: impl Into<String>,
        amount: i64,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            category: Some(category.into()),
            subcategory: Some(subcategory.into()),
        }
    }

    /// Assign the category pair after construction.
    pub fn set_categories(&mut self, category: impl Into<String>, subcategory: impl Into<String>) {
        self.category = Some(category.into());
        self.subcategory = Some(subcategory.into());
    }
}

impl fmt::Display for DeductionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "項目: {}, 金額: {}円",
            align_left(&self.name, NAME_COLUMNS),
            yen(self.amount)
        )
    }
}

/// Parse a payslip amount token into signed whole yen.
///
/// Thousands-separator commas are stripped; one leading minus is allowed.
/// Any other shape yields 0; text extraction occasionally leaves a stray
/// non-numeric token next to a label, and that must not abort the run.
pub fn parse_amount(token: &str) -> i64 {
    let stripped = token.replace(',', "");
    let digits = stripped.strip_prefix('-').unwrap_or(&stripped);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    stripped.parse().unwrap_or(0)
}

/// Comma-grouped yen amount, e.g. `15,000` / `-3,000`.
pub(crate) fn yen(amount: i64) -> String {
    amount.to_formatted_string(&Locale::en)
}

/// Left-align `text` in `width` half-width columns.
///
/// Full-width characters occupy two columns, so `健康保険` pads to the same
/// edge as an eight-letter ASCII name.
fn align_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_with_separators() {
        assert_eq!(parse_amount("15,000"), 15000);
        assert_eq!(parse_amount("1,234,567"), 1234567);
        assert_eq!(parse_amount("500"), 500);
        assert_eq!(parse_amount("0"), 0);
    }

    #[test]
    fn test_parse_amount_negative() {
        assert_eq!(parse_amount("-3,000"), -3000);
        assert_eq!(parse_amount("-42"), -42);
    }

    #[test]
    fn test_parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount("---"), 0);
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("abc"), 0);
        assert_eq!(parse_amount("12a3"), 0);
        assert_eq!(parse_amount("1.5"), 0);
        // minus only allowed in front
        assert_eq!(parse_amount("12-3"), 0);
    }

    #[test]
    fn test_set_categories() {
        let mut item = DeductionItem::new("健康保険", 15000);
        assert_eq!(item.category, None);
        item.set_categories("社会保険", "健康保険");
        assert_eq!(item.category.as_deref(), Some("社会保険"));
        assert_eq!(item.subcategory.as_deref(), Some("健康保険"));
    }

    #[test]
    fn test_display_groups_and_aligns() {
        let item = DeductionItem::new("健康保険", 15000);
        let rendered = item.to_string();
        assert!(rendered.contains("15,000円"), "got: {rendered}");
        // 4 full-width chars = 8 columns, padded out to 16
        assert!(rendered.contains("健康保険        ,"), "got: {rendered}");
    }

    #[test]
    fn test_display_negative_amount() {
        let item = DeductionItem::new("調整額", -3000);
        assert!(item.to_string().contains("-3,000円"));
    }

    #[test]
    fn test_serde_round_trip() {
        let item = DeductionItem::with_categories("健康保険", 15000, "社会保険", "健康保険");
        let json = serde_json::to_string(&item).unwrap();
        let back: DeductionItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
