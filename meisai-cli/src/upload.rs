//! Hand-off surface for the upload collaborator.
//!
//! The browser automation that enters these records into MoneyForward lives
//! outside this repository. Everything it consumes (the ordered records and
//! the formatted payday) is rendered here, read-only.

use meisai_core::SalaryPeriod;

/// Render the registration summary the uploader consumes.
pub fn register(period: &SalaryPeriod) {
    let Some(payday) = period.payday() else {
        eprintln!("[ERROR] 給料日が設定されていません。");
        return;
    };

    println!("{}の{}として以下を登録します。", payday, period.kind.label());
    for item in period.items() {
        match (item.category.as_deref(), item.subcategory.as_deref()) {
            (Some(main), Some(sub)) => println!("{item} [{main}/{sub}]"),
            _ => println!("{item}"),
        }
    }
}
