//! Payslip kinds and their per-kind naming conventions.

use serde::{Deserialize, Serialize};

/// Which statement a period describes. Each kind carries its display label
/// and the infix used in the source PDF's filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryKind {
    Normal,
    Bonus,
    Special,
}

impl SalaryKind {
    /// Label shown in console messages.
    pub fn label(&self) -> &'static str {
        match self {
            SalaryKind::Normal => "給与",
            SalaryKind::Bonus => "賞与",
            SalaryKind::Special => "特別金",
        }
    }

    /// Filename infix of the source PDF for this kind.
    pub fn file_infix(&self) -> &'static str {
        match self {
            SalaryKind::Normal => "_kyuyo_",
            // Bonus and special statements arrive under the bonus naming scheme.
            SalaryKind::Bonus | SalaryKind::Special => "_syoyo_",
        }
    }
}
