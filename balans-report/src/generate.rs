//! Report generation over a canonical transaction list.
//!
//! Pure and total: empty input yields the all-zero report, never an error.
//! The balance sheet is assembled additively; when categorization is
//! inconsistent the accounting identity can drift, which is logged rather
//! than repaired.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use balans_core::{Category, FlowKind, Transaction, TxKind};

use crate::types::{
    BalanceSheet, CashFlowReport, CategoryExpense, CounterpartyEntry, DebtEntry, DebtReport,
    FinancialReport, MonthlyCashFlow, MonthlyPnl, PnlReport,
};

/// Equipment is depreciated straight-line over three years.
const DEPRECIATION_MONTHS: f64 = 36.0;

/// Synthetic expense line injected next to taxonomy categories.
const DEPRECIATION_LABEL: &str = "Амортизация";

/// Identity drift beyond rounding noise is reported, not repaired.
const IDENTITY_EPSILON: f64 = 0.01;

/// Internal/technical counterparty fragments excluded from the counterparty
/// report: self-transfers, ATMs, generic bank nodes.
const INTERNAL_COUNTERPARTIES: &[&str] = &[
    "kaspi депозит",
    "kaspi банкомат",
    "kaspi терминал",
    "депозит",
    "банкомат",
    "терминал",
    "не указан",
];

const RU_MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", RU_MONTHS[(month - 1) as usize], year)
}

/// Calendar months spanned by `[first, last]`, inclusive of both endpoints.
fn months_spanned(first: NaiveDate, last: NaiveDate) -> f64 {
    ((last.year() - first.year()) * 12 + last.month() as i32 - first.month() as i32 + 1) as f64
}

/// Inclusive date-range filter the host applies before regeneration.
pub fn filter_by_period(
    transactions: &[Transaction],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| from.map_or(true, |f| t.date >= f) && to.map_or(true, |u| t.date <= u))
        .cloned()
        .collect()
}

#[derive(Default)]
struct MonthBucket {
    revenue: f64,
    expenses: f64,
    inflow: f64,
    outflow: f64,
}

/// Derive the full set of financial statements from a transaction list.
pub fn generate_financial_report(transactions: &[Transaction]) -> FinancialReport {
    if transactions.is_empty() {
        return FinancialReport::default();
    }

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    // Straight-line depreciation over capitalized equipment
    let equipment_gross: f64 = sorted
        .iter()
        .filter(|t| t.is_capitalized)
        .map(|t| t.amount)
        .sum();
    let monthly_depreciation = equipment_gross / DEPRECIATION_MONTHS;
    let span = months_spanned(sorted[0].date, sorted[sorted.len() - 1].date);
    let total_depreciation = monthly_depreciation * span;

    // Calendar-month buckets and per-category expense totals
    let mut months: BTreeMap<(i32, u32), MonthBucket> = BTreeMap::new();
    let mut by_category: BTreeMap<&'static str, f64> = BTreeMap::new();
    for t in &sorted {
        let bucket = months.entry((t.date.year(), t.date.month())).or_default();
        match t.kind {
            TxKind::Income => {
                bucket.inflow += t.amount;
                if t.flow == FlowKind::Operating {
                    bucket.revenue += t.amount;
                }
            }
            TxKind::Expense => {
                bucket.outflow += t.amount;
                if !t.is_capitalized {
                    *by_category.entry(t.category.label()).or_default() += t.amount;
                    if t.flow == FlowKind::Operating {
                        bucket.expenses += t.amount;
                    }
                }
            }
        }
    }

    let revenue: f64 = months.values().map(|b| b.revenue).sum();
    let operating_expenses: f64 = months.values().map(|b| b.expenses).sum();
    let operating_profit = revenue - operating_expenses;
    let net_profit = revenue - operating_expenses - total_depreciation;

    let mut expenses_by_category: Vec<CategoryExpense> = by_category
        .into_iter()
        .map(|(category, amount)| CategoryExpense {
            category: category.to_string(),
            amount,
        })
        .collect();
    if total_depreciation > 0.0 {
        expenses_by_category.push(CategoryExpense {
            category: DEPRECIATION_LABEL.to_string(),
            amount: total_depreciation,
        });
    }
    expenses_by_category.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    let monthly_pnl: Vec<MonthlyPnl> = months
        .iter()
        .map(|((year, month), b)| MonthlyPnl {
            month: month_label(*year, *month),
            revenue: b.revenue,
            expenses: b.expenses,
            profit: b.revenue - b.expenses,
        })
        .collect();
    let monthly_cash_flow: Vec<MonthlyCashFlow> = months
        .iter()
        .map(|((year, month), b)| MonthlyCashFlow {
            month: month_label(*year, *month),
            inflow: b.inflow,
            outflow: b.outflow,
            net: b.inflow - b.outflow,
        })
        .collect();

    // Cash flow by section: signed sums over each transaction's flow kind
    let mut operating = 0.0;
    let mut investing = 0.0;
    let mut financing = 0.0;
    for t in &sorted {
        let signed = t.signed_amount();
        match t.flow {
            FlowKind::Operating => operating += signed,
            FlowKind::Investing => investing += signed,
            FlowKind::Financing => financing += signed,
        }
    }
    let net = operating + investing + financing;

    // Debt report: loan category pairs net per counterparty
    let mut receivables: BTreeMap<String, f64> = BTreeMap::new();
    let mut payables: BTreeMap<String, f64> = BTreeMap::new();
    for t in &sorted {
        if t.counterparty.is_empty() {
            continue;
        }
        match t.category {
            Category::LoanIssued => {
                *receivables.entry(t.counterparty.clone()).or_default() += t.amount;
            }
            Category::LoanRepaidToUs => {
                *receivables.entry(t.counterparty.clone()).or_default() -= t.amount;
            }
            Category::LoanReceived => {
                *payables.entry(t.counterparty.clone()).or_default() += t.amount;
            }
            Category::LoanRepayment => {
                *payables.entry(t.counterparty.clone()).or_default() -= t.amount;
            }
            _ => {}
        }
    }
    let debt_report = DebtReport {
        receivables: debt_entries(receivables),
        payables: debt_entries(payables),
    };
    let total_receivables: f64 = debt_report.receivables.iter().map(|e| e.amount).sum();
    let total_payables: f64 = debt_report.payables.iter().map(|e| e.amount).sum();

    // Balance sheet, assembled additively
    let dividends: f64 = sorted
        .iter()
        .filter(|t| t.category == Category::Dividends && t.is_expense())
        .map(|t| t.amount)
        .sum();
    let contributions: f64 = sorted
        .iter()
        .filter(|t| t.category == Category::OwnerContribution && t.is_income())
        .map(|t| t.amount)
        .sum();

    let cash = net;
    let equipment_net = equipment_gross - total_depreciation;
    let total_assets = cash + total_receivables + equipment_net;
    let retained_earnings = net_profit - dividends + contributions;
    let total_equity = retained_earnings;
    let total_liabilities = total_payables;

    let drift = total_assets - (total_liabilities + total_equity);
    if drift.abs() > IDENTITY_EPSILON {
        warn!(drift, "баланс не сходится: активы != обязательства + капитал");
    }

    // Counterparty report, internal nodes excluded
    let mut parties: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for t in &sorted {
        let lower = t.counterparty.to_lowercase();
        if lower.is_empty() || INTERNAL_COUNTERPARTIES.iter().any(|f| lower.contains(f)) {
            continue;
        }
        let entry = parties.entry(t.counterparty.clone()).or_default();
        match t.kind {
            TxKind::Income => entry.0 += t.amount,
            TxKind::Expense => entry.1 += t.amount,
        }
    }
    let mut counterparty_report: Vec<CounterpartyEntry> = parties
        .into_iter()
        .map(|(counterparty, (income, expense))| CounterpartyEntry {
            counterparty,
            income,
            expense,
            net: income - expense,
        })
        .collect();
    counterparty_report.sort_by(|a, b| b.net.abs().total_cmp(&a.net.abs()));

    FinancialReport {
        pnl: PnlReport {
            revenue,
            operating_expenses,
            depreciation: total_depreciation,
            operating_profit,
            net_profit,
            monthly: monthly_pnl,
            expenses_by_category,
        },
        cash_flow: CashFlowReport {
            net,
            operating,
            investing,
            financing,
            monthly: monthly_cash_flow,
        },
        balance_sheet: BalanceSheet {
            cash,
            receivables: total_receivables,
            equipment_gross,
            accumulated_depreciation: total_depreciation,
            equipment_net,
            total_assets,
            payables: total_payables,
            total_liabilities,
            retained_earnings,
            total_equity,
        },
        counterparty_report,
        debt_report,
    }
}

/// Keep only strictly positive rounded balances, largest first.
fn debt_entries(map: BTreeMap<String, f64>) -> Vec<DebtEntry> {
    let mut entries: Vec<DebtEntry> = map
        .into_iter()
        .filter(|(_, amount)| amount.round() > 0.0)
        .map(|(counterparty, amount)| DebtEntry {
            counterparty,
            amount,
        })
        .collect();
    entries.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    entries
}
