//! Cross-check of itemized deductions against the stated total.

use num_format::{Locale, ToFormattedString};
use thiserror::Error;

use crate::item::DeductionItem;

/// Itemized sum and the printed deduction total disagree.
///
/// Fatal to the extraction: a mismatch means a mis-tokenized amount, a
/// missing dictionary entry, or layout drift in the payslip, and retrying
/// without fixing one of those reproduces the identical mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "控除合計額と各控除項目の合計が一致しません: 合計={}円, 控除合計={}円",
    .computed.to_formatted_string(&Locale::en),
    .stated.to_formatted_string(&Locale::en)
)]
pub struct ReconcileError {
    /// Arithmetic sum of the itemized deductions.
    pub computed: i64,
    /// Amount printed on the deduction-sum line.
    pub stated: i64,
}

/// Verify that the itemized amounts sum to the total record's amount.
pub fn reconcile(items: &[DeductionItem], total: &DeductionItem) -> Result<(), ReconcileError> {
    let computed: i64 = items.iter().map(|item| item.amount).sum();
    if computed == total.amount {
        Ok(())
    } else {
        Err(ReconcileError {
            computed,
            stated: total.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(amounts: &[i64]) -> Vec<DeductionItem> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, &a)| DeductionItem::new(format!("項目{i}"), a))
            .collect()
    }

    #[test]
    fn test_matching_total_succeeds() {
        let itemized = items(&[10000, 20000, 5000]);
        let total = DeductionItem::new("控除合計", 35000);
        assert!(reconcile(&itemized, &total).is_ok());
    }

    #[test]
    fn test_mismatch_carries_both_amounts() {
        let itemized = items(&[10000, 20000, 5000]);
        let total = DeductionItem::new("控除合計", 40000);
        let err = reconcile(&itemized, &total).unwrap_err();
        assert_eq!(err.computed, 35000);
        assert_eq!(err.stated, 40000);
        let msg = err.to_string();
        assert!(msg.contains("35,000"), "got: {msg}");
        assert!(msg.contains("40,000"), "got: {msg}");
    }

    #[test]
    fn test_empty_itemized_against_zero_total() {
        let total = DeductionItem::new("控除合計", 0);
        assert!(reconcile(&[], &total).is_ok());
    }

    #[test]
    fn test_negative_adjustments_participate() {
        let itemized = items(&[10000, -3000]);
        let total = DeductionItem::new("控除合計", 7000);
        assert!(reconcile(&itemized, &total).is_ok());
    }
}
