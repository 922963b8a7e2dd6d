//! meisai-ingest: payslip PDF ingestion (page sources, whitespace
//! tokenization, the item dictionary, and deduction extraction).

pub mod dictionary;
pub mod extract;
pub mod pdf;
pub mod reader;
pub mod source;
pub mod tokens;

pub use dictionary::{ItemDef, ItemDictionary};
pub use extract::{Extraction, extract_deductions};
pub use pdf::PdfSource;
pub use reader::SalaryReader;
pub use source::{PageSource, PageText};
pub use tokens::flatten_tokens;
