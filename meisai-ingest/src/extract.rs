//! Token-scan extraction of deduction records.

use meisai_core::{DeductionItem, parse_amount};

use crate::dictionary::ItemDef;

/// Result of one extraction pass over a token sequence.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Itemized deductions in token order, total excluded.
    pub items: Vec<DeductionItem>,
    /// The deduction-sum record, when one was matched.
    pub total: Option<DeductionItem>,
}

/// Scan `tokens` for dictionary labels, taking each matched label's amount
/// from the token that follows it.
///
/// The payslip lays its text out label/value/label/value, so the scan just
/// advances one position after a match; an amount token may itself match a
/// definition at its own position. The amount index wraps to 0 when a label
/// is the final token; the fixed layout never produces that in practice, but
/// the behavior is part of the contract and tested.
pub fn extract_deductions(tokens: &[String], defs: &[ItemDef], total_label: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for (idx, token) in tokens.iter().enumerate() {
        for def in defs {
            if *token != def.name {
                continue;
            }

            let amount = parse_amount(&tokens[(idx + 1) % tokens.len()]);
            let item = DeductionItem::with_categories(
                def.name.as_str(),
                amount,
                def.category.as_str(),
                def.subcategory.as_str(),
            );

            if def.name == total_label {
                // A later total line silently replaces an earlier one.
                extraction.total = Some(item);
            } else {
                extraction.items.push(item);
            }

            // First matching definition claims this position.
            break;
        }
    }

    extraction
}
