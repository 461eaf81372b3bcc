use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use balans_core::Transaction;
use balans_ingest::process_statement;
use balans_report::{FinancialReport, filter_by_period, generate_financial_report};

#[derive(Parser, Debug)]
#[command(name = "balans", version, about = "Bank statement analytics: import, categorize, report")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement file (CSV or PDF) into a categorized ledger
    Import {
        /// Statement file to import
        file: PathBuf,

        /// Write the ledger as JSON (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Generate financial statements from a previously imported ledger
    Report {
        /// Ledger JSON produced by `balans import`
        input: PathBuf,

        /// Write the report as JSON (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Keep only transactions on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Keep only transactions on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Import a statement and print a report summary in one go
    Analyze {
        /// Statement file to analyze
        file: PathBuf,

        #[arg(long)]
        from: Option<NaiveDate>,

        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Import { file, out } => import(file, out).await,
        Command::Report { input, out, from, to } => report(input, out, from, to).await,
        Command::Analyze { file, from, to } => analyze(file, from, to).await,
    }
}

fn import_ledger(file: &PathBuf) -> Result<Vec<Transaction>> {
    let txns = process_statement(file, |phase| println!("  {phase}"))
        .with_context(|| format!("импорт {}", file.display()))?;
    println!("Разобрано операций: {} из {}", txns.len(), file.display());
    Ok(txns)
}

async fn write_or_print(json: String, out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("запись {}", path.display()))?;
            println!("Сохранено: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

async fn import(file: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let txns = import_ledger(&file)?;
    let json = serde_json::to_string_pretty(&txns).context("сериализация операций")?;
    write_or_print(json, out).await
}

async fn read_ledger(input: &PathBuf) -> Result<Vec<Transaction>> {
    let raw = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("чтение {}", input.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("разбор {}", input.display()))
}

async fn report(
    input: PathBuf,
    out: Option<PathBuf>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let txns = read_ledger(&input).await?;
    let filtered = filter_by_period(&txns, from, to);
    let report = generate_financial_report(&filtered);
    let json = serde_json::to_string_pretty(&report).context("сериализация отчета")?;
    write_or_print(json, out).await
}

async fn analyze(file: PathBuf, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<()> {
    let txns = import_ledger(&file)?;
    let filtered = filter_by_period(&txns, from, to);
    let report = generate_financial_report(&filtered);
    print_summary(&report, &filtered);
    Ok(())
}

fn print_summary(report: &FinancialReport, txns: &[Transaction]) {
    let expenses = txns.iter().filter(|t| t.is_expense()).count();
    println!("\nОпераций: {} (расходных: {})", txns.len(), expenses);

    println!("\n# Прибыли и убытки");
    println!("Выручка:            {:>15.2}", report.pnl.revenue);
    println!("Операционные расходы:{:>14.2}", report.pnl.operating_expenses);
    println!("Амортизация:        {:>15.2}", report.pnl.depreciation);
    println!("Чистая прибыль:     {:>15.2}", report.pnl.net_profit);

    println!("\n# Движение денег");
    println!(
        "Операционный: {:.2} | Инвестиционный: {:.2} | Финансовый: {:.2} | Итого: {:.2}",
        report.cash_flow.operating,
        report.cash_flow.investing,
        report.cash_flow.financing,
        report.cash_flow.net
    );

    for month in &report.pnl.monthly {
        println!(
            "  {} | выручка {:.2} | расходы {:.2} | прибыль {:.2}",
            month.month, month.revenue, month.expenses, month.profit
        );
    }

    if !report.counterparty_report.is_empty() {
        println!("\n# Контрагенты (топ-5 по обороту)");
        for entry in report.counterparty_report.iter().take(5) {
            println!(
                "  {} | доход {:.2} | расход {:.2} | сальдо {:.2}",
                entry.counterparty, entry.income, entry.expense, entry.net
            );
        }
    }

    if !report.debt_report.receivables.is_empty() || !report.debt_report.payables.is_empty() {
        println!("\n# Долги");
        for entry in &report.debt_report.receivables {
            println!("  нам должны: {} — {:.2}", entry.counterparty, entry.amount);
        }
        for entry in &report.debt_report.payables {
            println!("  мы должны:  {} — {:.2}", entry.counterparty, entry.amount);
        }
    }
}
