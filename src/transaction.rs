// 💸 Transaction Record - income/expense entries
//
// A transaction is a small JSON record. The sign of `amount` encodes the
// direction, `type` repeats it explicitly. Date and time are optional so that
// "missing date" stays a first-class branch instead of a silent default.

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Categories offered by the income entry flow
pub const INCOME_CATEGORIES: [&str; 3] = ["Salary", "Gift", "Percentages"];

/// Categories offered by the expense entry flow
pub const EXPENSE_CATEGORIES: [&str; 12] = [
    "Housing",
    "Food",
    "Transportation",
    "Healthcare",
    "Insurance",
    "Education",
    "Entertainment",
    "Clothing",
    "Beauty",
    "Debts",
    "Household",
    "Charity",
];

/// Time used when an entry is saved without one
pub const DEFAULT_TIME: &str = "00:00";

// ============================================================================
// TRANSACTION TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Sign prefix written in front of the amount
    fn sign(&self) -> char {
        match self {
            TransactionType::Income => '+',
            TransactionType::Expense => '-',
        }
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// Transaction as stored in the ledger blob
///
/// Core fields are immutable once stored; a transaction is only ever
/// removed (by id), never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable identity
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Signed decimal string, e.g. "+3000" or "-50"
    pub amount: String,

    /// "HH:MM" (older records carry "10:00 AM" style values)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// "YYYY-MM-DD"
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Transaction {
    /// Create a transaction from already-formatted fields
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        amount: &str,
        time: &str,
        tx_type: TransactionType,
        date: &str,
    ) -> Self {
        Transaction {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            amount: amount.to_string(),
            time: Some(time.to_string()),
            tx_type,
            date: Some(date.to_string()),
            category: None,
        }
    }

    /// Build an income entry from the parts collected by the entry flow
    pub fn income(
        category: &str,
        year: u32,
        month: u32,
        day: u32,
        time: &str,
        description: &str,
        amount: &str,
    ) -> Result<Self> {
        Self::entry(
            TransactionType::Income,
            category,
            (year, month, day),
            time,
            description,
            amount,
        )
    }

    /// Build an expense entry from the parts collected by the entry flow
    pub fn expense(
        category: &str,
        year: u32,
        month: u32,
        day: u32,
        time: &str,
        description: &str,
        amount: &str,
    ) -> Result<Self> {
        Self::entry(
            TransactionType::Expense,
            category,
            (year, month, day),
            time,
            description,
            amount,
        )
    }

    fn entry(
        tx_type: TransactionType,
        category: &str,
        (year, month, day): (u32, u32, u32),
        time: &str,
        description: &str,
        amount: &str,
    ) -> Result<Self> {
        let time = if time.trim().is_empty() {
            DEFAULT_TIME.to_string()
        } else {
            time.trim().to_string()
        };

        // The entry form collects an unsigned magnitude
        let magnitude = amount.trim().trim_start_matches(['+', '-']);
        if magnitude.is_empty() {
            bail!("{} entry needs an amount", tx_type.as_str());
        }

        Ok(Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            title: category.to_string(),
            description: description.to_string(),
            amount: format!("{}{}", tx_type.sign(), magnitude),
            time: Some(time),
            tx_type,
            date: Some(format!("{:04}-{:02}-{:02}", year, month, day)),
            category: Some(category.to_string()),
        })
    }

    /// Permissive amount: NaN when the string is not a number
    pub fn amount_value(&self) -> f64 {
        self.try_amount_value().unwrap_or(f64::NAN)
    }

    /// Strict amount parse
    pub fn try_amount_value(&self) -> Result<f64> {
        let raw = self.amount.trim();
        let digits = raw.strip_prefix('+').unwrap_or(raw);
        digits.parse::<f64>().map_err(|e| {
            anyhow!(
                "transaction {}: amount '{}' is not a number ({})",
                self.id,
                self.amount,
                e
            )
        })
    }

    /// Calendar date, None when missing or unparseable
    ///
    /// Accepts both "2023-01-05" and the unpadded "2023-1-5".
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    pub fn is_income(&self) -> bool {
        self.tx_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.tx_type == TransactionType::Expense
    }
}
