use anyhow::Result;
use clap::Parser;
use meisai_core::{SalaryKind, SalaryPeriod};
use meisai_ingest::{PdfSource, SalaryReader};

mod config;
mod confirm;
mod upload;

#[derive(Parser, Debug)]
#[command(
    name = "meisai",
    version,
    about = "PDFから給与情報(控除情報)を取得しMoneyForwardへアップロードします。"
)]
struct Cli {
    /// 登録する年
    year: i32,

    /// 登録する月
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    month: u32,

    /// 賞与登録であるか
    #[arg(short, long)]
    bonus: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let kind = if cli.bonus {
        SalaryKind::Bonus
    } else {
        SalaryKind::Normal
    };

    println!(
        "{}年{:02}月の{}明細登録を行います。",
        cli.year,
        cli.month,
        kind.label()
    );

    let cfg = config::load_config(&config::config_path())?;

    let reader = SalaryReader::new(
        cli.year,
        cli.month,
        cfg.source.employee_number.clone(),
        kind,
        &config::userdata_dir(),
        cfg.source.pdf_password.clone(),
        PdfSource,
    );
    println!("読み出し元PDF: {}", reader.pdf_filename()?);

    let mut period = SalaryPeriod::new(cli.year, cli.month, kind, &reader)?;

    show_deduction_info(&period);

    if !confirm::confirm_payday(&mut period, cfg.upload.default_day)? {
        return Ok(());
    }

    upload::register(&period);
    Ok(())
}

/// Print the records about to be registered.
fn show_deduction_info(period: &SalaryPeriod) {
    println!("--- 登録する控除項目一覧 ---");
    for item in period.items() {
        println!("{item}");
    }
    println!("--------- end ----------");
}
