use anyhow::{Context, Result};
use std::env;
use std::fs;

use pocket_ledger::{AppConfig, ChartSeries, Ledger, VERSION};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = AppConfig::from_env()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let rest = config.apply_args(&args)?;
    log::debug!("pocket-ledger {} with {:?}", VERSION, config);

    let ledger = load_ledger(&config)?;

    match rest.first().map(String::as_str) {
        Some("totals") => run_totals(&ledger, &config),
        Some("export") => run_export(&ledger)?,
        Some("chart") | None => run_chart(&ledger, &config),
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            eprintln!("   Usage: pocket-ledger [chart|totals|export] [--file F] [--month M] [--granularity G] [--filter F]");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn load_ledger(config: &AppConfig) -> Result<Ledger> {
    match &config.ledger_file {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read ledger file {}", path.display()))?;
            Ledger::from_json(&json)
        }
        None => {
            log::info!("No ledger file configured, using sample data");
            Ok(Ledger::sample())
        }
    }
}

fn run_chart(ledger: &Ledger, config: &AppConfig) {
    println!(
        "📈 {} - {} ({:?})",
        config.month, config.granularity, config.filter
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match ledger.chart(&config.month, config.filter, config.granularity) {
        Some(series) => print_series(&series),
        None => println!("No data yet"),
    }
}

fn print_series(series: &ChartSeries) {
    let width = series.labels.iter().map(String::len).max().unwrap_or(0);
    let precision = series.decimal_places as usize;
    for (label, value) in series.points() {
        println!("{:<width$}  {:>12.precision$}", label, value, width = width, precision = precision);
    }
}

fn run_totals(ledger: &Ledger, config: &AppConfig) {
    let month = &config.month;
    println!("💰 {}", month);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ Income:  ${:.2}", ledger.income_total(month));
    println!("✓ Expense: ${:.2}", ledger.expense_total(month));
    println!("✓ Entries: {}", ledger.transactions_for(month).len());
}

fn run_export(ledger: &Ledger) -> Result<()> {
    println!("{}", ledger.to_json()?);
    Ok(())
}
