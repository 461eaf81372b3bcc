//! balans-report: derives financial statements (P&L, cash flow, balance
//! sheet, counterparty and debt reports) from a canonical transaction list.
//!
//! Generation is a pure function of its input: the report has no identity or
//! storage of its own and is recomputed whenever the ledger changes.

pub mod generate;
pub mod types;

pub use generate::{filter_by_period, generate_financial_report};
pub use types::{
    BalanceSheet, CashFlowReport, CategoryExpense, CounterpartyEntry, DebtEntry, DebtReport,
    FinancialReport, MonthlyCashFlow, MonthlyPnl, PnlReport,
};
