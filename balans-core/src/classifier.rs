//! Keyword classifier mapping free statement text to a category.
//!
//! No scoring and no ranking: rules are evaluated top to bottom and the first
//! keyword hit wins, so the order of `default_rules` encodes priority.
//! Statement text is extremely noisy (merchant codes, transliterations,
//! abbreviations), so keywords are mostly stems — `аренд` covers
//! аренда/аренды/аренду.

use crate::category::Category;

/// One ordered classification rule: category plus its keyword list.
#[derive(Debug, Clone)]
pub struct Rule {
    pub category: Category,
    pub keywords: Vec<&'static str>,
}

impl Rule {
    fn new(category: Category, keywords: &[&'static str]) -> Self {
        Self {
            category,
            keywords: keywords.to_vec(),
        }
    }
}

/// Self-transfer phrases checked before the rule table. Their text also
/// carries bank-brand tokens ("Kaspi Депозит") that would hit unrelated
/// rules if they reached the general phase.
const SPECIAL_CASES: &[(&[&str], Category)] = &[
    (
        &["на свой депозит", "свой депозит", "перевод на депозит"],
        Category::DepositTransfer,
    ),
    (
        &["в банкомате", "через банкомат", "снятие наличных"],
        Category::CashWithdrawal,
    ),
    (
        &["через терминал", "в терминале"],
        Category::CashDeposit,
    ),
];

/// Deterministic keyword classifier over an injected rule table.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Classifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Classify a transaction by its description, counterparty, and the
    /// bank's operation label. Total: every input maps to exactly one
    /// category, `Other` when nothing matches.
    pub fn classify(&self, description: &str, counterparty: &str, operation: &str) -> Category {
        let hay = format!("{description} {counterparty} {operation}").to_lowercase();

        for (phrases, category) in SPECIAL_CASES {
            if phrases.iter().any(|p| hay.contains(p)) {
                return *category;
            }
        }

        for rule in &self.rules {
            if rule.keywords.iter().any(|k| hay.contains(k)) {
                return rule.category;
            }
        }

        Category::Other
    }
}

/// Production rule table. Specific categories (equipment, loans) come first;
/// greedy income keywords ("оплата", "поступление") come last so expense
/// rules get the first shot at mixed phrases.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            Category::Equipment,
            &[
                "оборудовани", "станок", "ноутбук", "компьютер", "принтер",
                "pos-терминал", "кассовый аппарат", "холодильник", "кондиционер",
                "мебель",
            ],
        ),
        Rule::new(
            Category::LoanIssued,
            &["выдача займа", "займ выдан", "заем выдан", "выдали в долг"],
        ),
        Rule::new(
            Category::LoanRepaidToUs,
            &["возврат долга", "возврат займа", "вернул долг", "вернули долг"],
        ),
        Rule::new(
            Category::LoanReceived,
            &[
                "получение кредита", "кредит зачислен", "зачисление кредита",
                "получение займа", "кредитные средства",
            ],
        ),
        Rule::new(
            Category::LoanRepayment,
            &[
                "погашение кредита", "погашение займа", "оплата кредита",
                "платеж по кредиту", "платёж по кредиту",
            ],
        ),
        Rule::new(Category::Dividends, &["дивиденд"]),
        Rule::new(
            Category::OwnerContribution,
            &[
                "взнос учредителя", "вклад учредителя", "пополнение от учредителя",
                "уставный капитал",
            ],
        ),
        Rule::new(
            Category::Salary,
            &[
                "зарплата", "заработная плата", "оплата труда", "аванс сотруднику",
                "выплата сотруднику", "премия",
            ],
        ),
        Rule::new(
            Category::Taxes,
            &["налог", "ипн", "опв", "осмс", "соцотчислени", "социальные отчислени", "egov", "егов"],
        ),
        Rule::new(Category::Rent, &["аренд"]),
        Rule::new(
            Category::Utilities,
            &["коммунальн", "электроэнерг", "водоснабжен", "отоплен", "энергосбыт", "алсеко"],
        ),
        Rule::new(
            Category::Telecom,
            &[
                "интернет", "связь", "телеком", "beeline", "билайн", "kcell",
                "кселл", "tele2", "теле2", "altel", "казахтелеком",
            ],
        ),
        Rule::new(
            Category::Fuel,
            &["азс", "гсм", "бензин", "топлив", "казмунайгаз", "qazaq oil", "helios", "гелиос"],
        ),
        Rule::new(
            Category::Transport,
            &["такси", "yandex go", "яндекс go", "indriver", "индрайвер", "проезд", "перевозк", "автобус"],
        ),
        Rule::new(
            Category::BusinessTrips,
            &["командировк", "авиабилет", "air astana", "гостиниц", "отель", "проживан"],
        ),
        Rule::new(
            Category::Meals,
            &["ресторан", "кафе", "столов", "кофейн", "питани", "glovo", "wolt", "chocofood", "доставка еды"],
        ),
        Rule::new(
            Category::Marketing,
            &["реклам", "маркетинг", "таргет", "продвижен", "smm", "google ads", "яндекс директ", "instagram"],
        ),
        Rule::new(
            Category::Software,
            &[
                "подписк", "лицензи", "программное обеспечение", "софт", "1с", "1c",
                "saas", "microsoft", "google workspace", "adobe", "zoom",
            ],
        ),
        Rule::new(
            Category::BankFees,
            &["комисси", "обслуживание счета", "эквайринг", "банковские услуги"],
        ),
        Rule::new(Category::Insurance, &["страхов", "полис"]),
        Rule::new(
            Category::Repairs,
            &["ремонт", "сервисное обслуживан", "техобслуживан"],
        ),
        Rule::new(
            Category::Training,
            &["обучени", "тренинг", "семинар", "вебинар", "курсы", "мастер-класс"],
        ),
        Rule::new(Category::OfficeSupplies, &["канцеляр", "бумага", "картридж"]),
        Rule::new(
            Category::Materials,
            &["материал", "сырье", "сырьё", "комплектующ", "фурнитур", "запчаст"],
        ),
        Rule::new(
            Category::Goods,
            &["закуп", "товар", "поставщик", "поставк", "оптом", "оптов"],
        ),
        Rule::new(
            Category::Household,
            &["хозяйственн", "хозтовар", "бытовая хими", "уборк", "magnum"],
        ),
        Rule::new(
            Category::Medical,
            &["аптек", "медицин", "клиник", "стоматолог", "europharma", "еврофарма"],
        ),
        Rule::new(
            Category::Charity,
            &["благотворительн", "пожертвован", "спонсорск"],
        ),
        Rule::new(Category::Fines, &["штраф", "пеня", "пени", "неустойк"]),
        Rule::new(
            Category::Services,
            &[
                "юридическ", "бухгалтерск", "нотариус", "консультац", "аутсорсинг",
                "клининг", "охран", "аудит",
            ],
        ),
        Rule::new(
            Category::Revenue,
            &[
                "оплата от", "оплата клиент", "поступление от", "выручка", "продаж",
                "аванс от", "оплата заказ", "оплата по договору", "от покупател",
            ],
        ),
        Rule::new(
            Category::OtherIncome,
            &["кэшбэк", "кешбэк", "бонус", "вознаграждени", "проценты по депозиту"],
        ),
    ]
}
