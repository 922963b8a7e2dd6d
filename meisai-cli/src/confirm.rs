//! Interactive payday confirmation before the hand-off.

use std::io::{self, Write};

use anyhow::Result;
use meisai_core::SalaryPeriod;

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Ask for the payday (offering `default_day`) and a final Y/n answer.
///
/// Returns true when the period now carries a confirmed payday.
pub fn confirm_payday(period: &mut SalaryPeriod, default_day: u32) -> Result<bool> {
    let answer = prompt(&format!(
        "MoneyForwardへの給与登録を行います。登録日を入力してください。({default_day}日)"
    ))?;
    let day = if answer.is_empty() {
        default_day.to_string()
    } else {
        answer
    };

    if !period.set_payday(&day) {
        eprintln!("[ERROR] 指定された日付は誤っています。正しい日付を入力してください。");
        return Ok(false);
    }
    let Some(payday) = period.payday() else {
        return Ok(false);
    };

    let answer = prompt(&format!(
        "{payday}を給料日として登録します。よろしいですか。(Y/n)"
    ))?;
    if answer.is_empty() || answer == "Y" {
        Ok(true)
    } else {
        println!("給与登録をキャンセルしました。");
        Ok(false)
    }
}
