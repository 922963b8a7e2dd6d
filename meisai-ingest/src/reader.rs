//! Pipeline owner: derive the source filename, load the item dictionary,
//! read the document, extract and reconcile.

use std::path::{Path, PathBuf};

use meisai_core::{DeductionItem, DeductionSource, ReadError, SalaryKind, reconcile};

use crate::dictionary::ItemDictionary;
use crate::extract::extract_deductions;
use crate::source::PageSource;
use crate::tokens::flatten_tokens;

/// Top-level dictionary key holding the deduction definitions.
pub const DEDUCTION_KEY: &str = "deduction";
/// Payslip label of the deduction-sum line.
pub const DEDUCTION_SUM: &str = "控除合計";

/// Item dictionary filename inside the userdata directory.
pub const ITEMS_FILE: &str = "items.yml";
/// Payslip PDF directory inside the userdata directory.
pub const SALARY_DIR: &str = "salaryData";

const PDF_EXTENSION: &str = ".pdf";

/// Reads one period's deduction records out of its payslip PDF.
///
/// The page source is injected so the pipeline runs unchanged against
/// in-memory fixtures in tests.
pub struct SalaryReader<S> {
    pub year: i32,
    pub month: u32,
    /// Employee number, embedded verbatim in the source filename.
    pub number: String,
    pub kind: SalaryKind,
    pub password: Option<String>,
    pub items_file: PathBuf,
    pub salary_dir: PathBuf,
    /// Dictionary section consulted during extraction.
    pub section_key: String,
    /// Label of the deduction-sum line.
    pub total_label: String,
    source: S,
}

impl<S: PageSource> SalaryReader<S> {
    pub fn new(
        year: i32,
        month: u32,
        number: impl Into<String>,
        kind: SalaryKind,
        userdata_dir: &Path,
        password: Option<String>,
        source: S,
    ) -> Self {
        Self {
            year,
            month,
            number: number.into(),
            kind,
            password,
            items_file: userdata_dir.join(ITEMS_FILE),
            salary_dir: userdata_dir.join(SALARY_DIR),
            section_key: DEDUCTION_KEY.to_string(),
            total_label: DEDUCTION_SUM.to_string(),
            source,
        }
    }

    /// Source PDF filename for this period, e.g. `202411_kyuyo_12345.pdf`.
    pub fn pdf_filename(&self) -> Result<String, ReadError> {
        if self.number.trim().is_empty() {
            return Err(ReadError::FilenameDerivation {
                reason: "社員番号が設定されていません。".to_string(),
            });
        }
        Ok(format!(
            "{}{:02}{}{}{}",
            self.year,
            self.month,
            self.kind.file_infix(),
            self.number,
            PDF_EXTENSION
        ))
    }
}

impl<S: PageSource> DeductionSource for SalaryReader<S> {
    /// Run the full pipeline and return the records with the total last.
    fn read_deductions(&self) -> Result<Vec<DeductionItem>, ReadError> {
        let filename = self.pdf_filename()?;
        let dictionary = ItemDictionary::load(&self.items_file)?;

        let pages = self
            .source
            .pages(&self.salary_dir.join(&filename), self.password.as_deref())?;
        let tokens = flatten_tokens(&pages);

        let extraction = extract_deductions(
            &tokens,
            dictionary.section(&self.section_key),
            &self.total_label,
        );
        let total = extraction.total.ok_or_else(|| ReadError::MissingTotal {
            label: self.total_label.clone(),
        })?;

        reconcile(&extraction.items, &total)?;

        let mut items = extraction.items;
        items.push(total);
        Ok(items)
    }
}
