//! Category taxonomy and cash-flow classification.
//!
//! Every transaction carries exactly one category. Serialized labels are the
//! Russian display strings the reporting layer and UI consume verbatim.

use serde::{Deserialize, Serialize};

/// Closed category taxonomy. `Other` is the fallback when no rule matches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    // Capital / financing
    #[serde(rename = "Оборудование")]
    Equipment,
    #[serde(rename = "Выдача займа")]
    LoanIssued,
    #[serde(rename = "Возврат долга")]
    LoanRepaidToUs,
    #[serde(rename = "Получение кредита")]
    LoanReceived,
    #[serde(rename = "Погашение кредита")]
    LoanRepayment,
    #[serde(rename = "Дивиденды")]
    Dividends,
    #[serde(rename = "Взнос учредителя")]
    OwnerContribution,
    // Operating expenses
    #[serde(rename = "Зарплата")]
    Salary,
    #[serde(rename = "Налоги")]
    Taxes,
    #[serde(rename = "Аренда")]
    Rent,
    #[serde(rename = "Коммунальные услуги")]
    Utilities,
    #[serde(rename = "Связь и интернет")]
    Telecom,
    #[serde(rename = "Топливо")]
    Fuel,
    #[serde(rename = "Транспорт")]
    Transport,
    #[serde(rename = "Командировки")]
    BusinessTrips,
    #[serde(rename = "Питание")]
    Meals,
    #[serde(rename = "Реклама и маркетинг")]
    Marketing,
    #[serde(rename = "Программное обеспечение")]
    Software,
    #[serde(rename = "Банковские услуги")]
    BankFees,
    #[serde(rename = "Страхование")]
    Insurance,
    #[serde(rename = "Ремонт")]
    Repairs,
    #[serde(rename = "Обучение")]
    Training,
    #[serde(rename = "Канцелярия")]
    OfficeSupplies,
    #[serde(rename = "Материалы")]
    Materials,
    #[serde(rename = "Закуп товара")]
    Goods,
    #[serde(rename = "Хозяйственные расходы")]
    Household,
    #[serde(rename = "Медицина")]
    Medical,
    #[serde(rename = "Благотворительность")]
    Charity,
    #[serde(rename = "Штрафы и пени")]
    Fines,
    #[serde(rename = "Услуги")]
    Services,
    // Income
    #[serde(rename = "Выручка")]
    Revenue,
    #[serde(rename = "Прочие доходы")]
    OtherIncome,
    // Self-transfers (internal, excluded from counterparty analytics)
    #[serde(rename = "Перевод на депозит")]
    DepositTransfer,
    #[serde(rename = "Снятие наличных")]
    CashWithdrawal,
    #[serde(rename = "Пополнение через терминал")]
    CashDeposit,
    #[serde(rename = "Прочее")]
    Other,
}

/// Which cash-flow statement section a transaction feeds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FlowKind {
    #[serde(rename = "operating")]
    Operating,
    #[serde(rename = "investing")]
    Investing,
    #[serde(rename = "financing")]
    Financing,
}

impl Category {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Equipment => "Оборудование",
            Category::LoanIssued => "Выдача займа",
            Category::LoanRepaidToUs => "Возврат долга",
            Category::LoanReceived => "Получение кредита",
            Category::LoanRepayment => "Погашение кредита",
            Category::Dividends => "Дивиденды",
            Category::OwnerContribution => "Взнос учредителя",
            Category::Salary => "Зарплата",
            Category::Taxes => "Налоги",
            Category::Rent => "Аренда",
            Category::Utilities => "Коммунальные услуги",
            Category::Telecom => "Связь и интернет",
            Category::Fuel => "Топливо",
            Category::Transport => "Транспорт",
            Category::BusinessTrips => "Командировки",
            Category::Meals => "Питание",
            Category::Marketing => "Реклама и маркетинг",
            Category::Software => "Программное обеспечение",
            Category::BankFees => "Банковские услуги",
            Category::Insurance => "Страхование",
            Category::Repairs => "Ремонт",
            Category::Training => "Обучение",
            Category::OfficeSupplies => "Канцелярия",
            Category::Materials => "Материалы",
            Category::Goods => "Закуп товара",
            Category::Household => "Хозяйственные расходы",
            Category::Medical => "Медицина",
            Category::Charity => "Благотворительность",
            Category::Fines => "Штрафы и пени",
            Category::Services => "Услуги",
            Category::Revenue => "Выручка",
            Category::OtherIncome => "Прочие доходы",
            Category::DepositTransfer => "Перевод на депозит",
            Category::CashWithdrawal => "Снятие наличных",
            Category::CashDeposit => "Пополнение через терминал",
            Category::Other => "Прочее",
        }
    }

    /// Cash-flow section for this category. Equipment is the only investing
    /// category; the four financing categories are loans in both directions
    /// plus dividends and founder contributions.
    pub fn flow(&self) -> FlowKind {
        match self {
            Category::Equipment => FlowKind::Investing,
            Category::LoanReceived
            | Category::LoanRepayment
            | Category::Dividends
            | Category::OwnerContribution => FlowKind::Financing,
            _ => FlowKind::Operating,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_label_matches_display() {
        let json = serde_json::to_string(&Category::Rent).unwrap();
        assert_eq!(json, "\"Аренда\"");
        assert_eq!(Category::Rent.to_string(), "Аренда");
    }

    #[test]
    fn test_label_round_trip() {
        for cat in [Category::Equipment, Category::LoanIssued, Category::Other] {
            let json = serde_json::to_string(&cat).unwrap();
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }

    #[test]
    fn test_flow_assignment() {
        assert_eq!(Category::Equipment.flow(), FlowKind::Investing);
        assert_eq!(Category::LoanReceived.flow(), FlowKind::Financing);
        assert_eq!(Category::LoanRepayment.flow(), FlowKind::Financing);
        assert_eq!(Category::Dividends.flow(), FlowKind::Financing);
        assert_eq!(Category::OwnerContribution.flow(), FlowKind::Financing);
        assert_eq!(Category::Rent.flow(), FlowKind::Operating);
        // Loans we issue (and their repayments to us) stay operating
        assert_eq!(Category::LoanIssued.flow(), FlowKind::Operating);
        assert_eq!(Category::LoanRepaidToUs.flow(), FlowKind::Operating);
    }
}
