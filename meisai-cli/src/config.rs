use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory holding config.toml, items.yml and the salaryData PDFs.
pub const USERDATA_DIR: &str = "userdata";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source: SourceSection,
    pub upload: UploadSection,
}

/// Where and how to read the payslip PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    /// Employee number embedded in the payslip filename.
    pub employee_number: String,
    /// Password of the payslip PDF, when it is protected.
    pub pdf_password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSection {
    /// Day offered as the payday default at the confirmation prompt.
    pub default_day: u32,
}

pub fn userdata_dir() -> PathBuf {
    PathBuf::from(USERDATA_DIR)
}

pub fn config_path() -> PathBuf {
    userdata_dir().join(CONFIG_FILE)
}

/// Load the config. Missing or malformed files are fatal before any
/// extraction is attempted.
pub fn load_config(path: &Path) -> Result<Config> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("設定ファイル{}を読み込めませんでした", path.display()))?;
    toml::from_str(&s)
        .with_context(|| format!("設定ファイル{}の形式が不正です", path.display()))
}
