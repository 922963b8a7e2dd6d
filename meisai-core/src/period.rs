//! One month of salary data and the payday it gets registered under.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ReadError;
use crate::item::DeductionItem;
use crate::kind::SalaryKind;

/// Capability that yields the validated deduction records for one period.
///
/// Implemented by the ingest pipeline; keeping period construction behind
/// this seam lets tests run against in-memory fixtures.
pub trait DeductionSource {
    /// Itemized deductions in extraction order, total record appended last.
    fn read_deductions(&self) -> Result<Vec<DeductionItem>, ReadError>;
}

/// Year/month/kind identity plus the validated deduction records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryPeriod {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub kind: SalaryKind,
    date: Option<u32>,
    items: Vec<DeductionItem>,
}

impl SalaryPeriod {
    /// Run the extraction pipeline once; the period only exists on success.
    pub fn new(
        year: i32,
        month: u32,
        kind: SalaryKind,
        source: &dyn DeductionSource,
    ) -> Result<Self, ReadError> {
        let items = source.read_deductions()?;
        Ok(Self {
            year,
            month,
            kind,
            date: None,
            items,
        })
    }

    /// Extraction-ordered records; the last entry is the deduction total.
    pub fn items(&self) -> &[DeductionItem] {
        &self.items
    }

    /// Set the payday day-of-month.
    ///
    /// Returns false (leaving any previous value untouched) when the input
    /// is not a day that exists in this period's calendar month.
    pub fn set_payday(&mut self, day: &str) -> bool {
        let Ok(day) = day.trim().parse::<u32>() else {
            return false;
        };
        if NaiveDate::from_ymd_opt(self.year, self.month, day).is_none() {
            return false;
        }
        self.date = Some(day);
        true
    }

    /// Payday as `YYYY/MM/DD` once a day has been set.
    pub fn payday(&self) -> Option<String> {
        self.date
            .map(|day| format!("{}/{:02}/{:02}", self.year, self.month, day))
    }
}
