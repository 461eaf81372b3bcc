//! Report structures consumed by the rendering and export layers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub pnl: PnlReport,
    pub cash_flow: CashFlowReport,
    pub balance_sheet: BalanceSheet,
    pub counterparty_report: Vec<CounterpartyEntry>,
    pub debt_report: DebtReport,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlReport {
    pub revenue: f64,
    pub operating_expenses: f64,
    pub depreciation: f64,
    pub operating_profit: f64,
    pub net_profit: f64,
    pub monthly: Vec<MonthlyPnl>,
    pub expenses_by_category: Vec<CategoryExpense>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPnl {
    /// Locale month label, e.g. "Июнь 2024".
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// One expense line; `category` is a display label so the synthetic
/// depreciation line fits alongside taxonomy categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpense {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowReport {
    pub net: f64,
    pub operating: f64,
    pub investing: f64,
    pub financing: f64,
    pub monthly: Vec<MonthlyCashFlow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashFlow {
    pub month: String,
    pub inflow: f64,
    pub outflow: f64,
    pub net: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub cash: f64,
    pub receivables: f64,
    pub equipment_gross: f64,
    pub accumulated_depreciation: f64,
    pub equipment_net: f64,
    pub total_assets: f64,
    pub payables: f64,
    pub total_liabilities: f64,
    pub retained_earnings: f64,
    pub total_equity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartyEntry {
    pub counterparty: String,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtReport {
    pub receivables: Vec<DebtEntry>,
    pub payables: Vec<DebtEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtEntry {
    pub counterparty: String,
    pub amount: f64,
}
