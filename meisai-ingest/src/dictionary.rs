//! The item dictionary: recognized deduction labels and their categories.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use meisai_core::ReadError;
use serde::Deserialize;

/// One recognized payslip label bound to its two-level category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemDef {
    pub name: String,
    pub category: String,
    pub subcategory: String,
}

/// Sectioned item definitions, loaded once per extraction run.
///
/// Declaration order within a section is preserved; it is the first-match
/// tie-break order during extraction, never alphabetized.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ItemDictionary {
    sections: HashMap<String, Vec<ItemDef>>,
}

impl ItemDictionary {
    /// Load definitions from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ReadError> {
        let text = fs::read_to_string(path).map_err(|e| ReadError::Dictionary {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&text).map_err(|reason| ReadError::Dictionary {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse YAML text. A definition missing `name`, `category` or
    /// `subcategory` is an error; unknown extra fields are ignored.
    pub fn parse(text: &str) -> Result<Self, String> {
        serde_yaml::from_str(text).map_err(|e| e.to_string())
    }

    /// Definitions under `key`, empty when the section is absent.
    pub fn section(&self, key: &str) -> &[ItemDef] {
        self.sections.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS_YAML: &str = "\
deduction:
  - name: 健康保険
    category: 社会保険
    subcategory: 健康保険
  - name: 厚生年金
    category: 社会保険
    subcategory: 年金
  - name: 控除合計
    category: 集計
    subcategory: 控除合計
";

    #[test]
    fn test_parse_preserves_declaration_order() {
        let dict = ItemDictionary::parse(ITEMS_YAML).unwrap();
        let defs = dict.section("deduction");
        assert_eq!(defs.len(), 3);
        assert_eq!(defs[0].name, "健康保険");
        assert_eq!(defs[1].name, "厚生年金");
        assert_eq!(defs[2].name, "控除合計");
        assert_eq!(defs[1].category, "社会保険");
        assert_eq!(defs[1].subcategory, "年金");
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let text = "\
deduction:
  - name: 健康保険
    category: 社会保険
";
        assert!(ItemDictionary::parse(text).is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let text = "\
deduction:
  - name: 健康保険
    category: 社会保険
    subcategory: 健康保険
    note: 2024年改定
";
        let dict = ItemDictionary::parse(text).unwrap();
        assert_eq!(dict.section("deduction").len(), 1);
    }

    #[test]
    fn test_absent_section_is_empty() {
        let dict = ItemDictionary::parse(ITEMS_YAML).unwrap();
        assert!(dict.section("payment").is_empty());
    }

    #[test]
    fn test_load_missing_file_is_dictionary_error() {
        let err = ItemDictionary::load(Path::new("no/such/items.yml")).unwrap_err();
        assert!(matches!(err, ReadError::Dictionary { .. }));
    }
}
