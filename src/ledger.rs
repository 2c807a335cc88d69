// 📒 Ledger - month-keyed transaction store
//
// The ledger is owned by a single caller and passed explicitly to whatever
// needs it. Transactions live under full month names ("January", ...), which
// is also the shape of the JSON blob it round-trips through.

use crate::chart::{build_chart_series, ChartSeries};
use crate::period::Granularity;
use crate::transaction::{Transaction, TransactionType};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full month names in calendar order
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Resolve a month name (any case) to its canonical spelling
pub fn canonical_month(name: &str) -> Option<&'static str> {
    let wanted = name.trim().to_lowercase();
    MONTHS.iter().copied().find(|m| m.to_lowercase() == wanted)
}

fn month_position(name: &str) -> usize {
    MONTHS.iter().position(|m| *m == name).unwrap_or(MONTHS.len())
}

// ============================================================================
// TYPE FILTER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn from_str_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "income" => TypeFilter::Income,
            "expense" => TypeFilter::Expense,
            _ => TypeFilter::All,
        }
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => tx.tx_type == TransactionType::Income,
            TypeFilter::Expense => tx.tx_type == TransactionType::Expense,
        }
    }

    /// Pressing the same filter twice goes back to All
    pub fn toggled(self, pressed: TypeFilter) -> TypeFilter {
        if self == pressed {
            TypeFilter::All
        } else {
            pressed
        }
    }
}

// ============================================================================
// LEDGER
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    months: BTreeMap<String, Vec<Transaction>>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Demo data shown on first launch
    pub fn sample() -> Self {
        let mut ledger = Ledger::new();
        let seed = [
            ("January", Transaction::new("1", "Salary", "January Salary", "+3000", "10:00 AM", TransactionType::Income, "2023-01-15")),
            ("January", Transaction::new("2", "Restaurant", "Dinner", "-50", "19:00 PM", TransactionType::Expense, "2023-01-16")),
            ("February", Transaction::new("3", "Salary", "February Salary", "+3500", "10:00 AM", TransactionType::Income, "2023-02-15")),
            ("February", Transaction::new("4", "Groceries", "Weekly shopping", "-200", "18:00 PM", TransactionType::Expense, "2023-02-17")),
            ("February", Transaction::new("5", "Gas", "Fuel for car", "-50", "20:00 PM", TransactionType::Expense, "2023-02-18")),
            ("October", Transaction::new("6", "Bonus", "Project bonus", "+2000", "09:00 AM", TransactionType::Income, "2023-10-05")),
            ("October", Transaction::new("7", "Clothes", "New shoes", "-120", "17:00 PM", TransactionType::Expense, "2023-10-10")),
            ("October", Transaction::new("8", "Internet Bill", "Monthly charge", "-30", "12:00 PM", TransactionType::Expense, "2023-10-12")),
        ];

        for (month, tx) in seed {
            ledger
                .months
                .entry(month.to_string())
                .or_default()
                .push(tx);
        }
        ledger
    }

    /// Append a transaction under a month
    pub fn add(&mut self, month: &str, tx: Transaction) -> Result<()> {
        let Some(month) = canonical_month(month) else {
            bail!("Unknown month '{}'", month);
        };

        log::debug!("➕ Adding {} {} to {}", tx.tx_type.as_str(), tx.id, month);
        self.months.entry(month.to_string()).or_default().push(tx);
        Ok(())
    }

    /// Remove a transaction by id; returns whether anything was removed
    pub fn delete(&mut self, month: &str, id: &str) -> bool {
        let Some(month) = canonical_month(month) else {
            return false;
        };
        let Some(list) = self.months.get_mut(month) else {
            return false;
        };

        let before = list.len();
        list.retain(|tx| tx.id != id);
        let removed = list.len() != before;

        if removed {
            log::debug!("🗑️  Deleted {} from {}", id, month);
        }
        removed
    }

    /// Transactions stored under a month, in insertion order
    pub fn transactions_for(&self, month: &str) -> &[Transaction] {
        canonical_month(month)
            .and_then(|m| self.months.get(m))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Months that hold at least one transaction, in calendar order
    pub fn months(&self) -> Vec<&str> {
        let mut months: Vec<&str> = self
            .months
            .iter()
            .filter(|(_, txs)| !txs.is_empty())
            .map(|(m, _)| m.as_str())
            .collect();
        months.sort_by_key(|m| month_position(m));
        months
    }

    pub fn len(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn filtered(&self, month: &str, filter: TypeFilter) -> Vec<Transaction> {
        self.transactions_for(month)
            .iter()
            .filter(|tx| filter.matches(tx))
            .cloned()
            .collect()
    }

    /// Sum of |amount| over the month's income entries
    pub fn income_total(&self, month: &str) -> f64 {
        self.magnitude_total(month, TransactionType::Income)
    }

    /// Sum of |amount| over the month's expense entries
    pub fn expense_total(&self, month: &str) -> f64 {
        self.magnitude_total(month, TransactionType::Expense)
    }

    fn magnitude_total(&self, month: &str, tx_type: TransactionType) -> f64 {
        self.transactions_for(month)
            .iter()
            .filter(|tx| tx.tx_type == tx_type)
            .map(|tx| tx.amount_value().abs())
            .sum()
    }

    /// Chart series for the month view under the current filter
    pub fn chart(&self, month: &str, filter: TypeFilter, granularity: Granularity) -> Option<ChartSeries> {
        build_chart_series(&self.filtered(month, filter), granularity)
    }

    // ========================================================================
    // JSON BLOB
    // ========================================================================

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize ledger")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Ledger = serde_json::from_str(json).context("Failed to parse ledger JSON")?;

        // Re-key through canonical_month so "january" and "January" merge
        let mut ledger = Ledger::new();
        for (month, txs) in raw.months {
            for tx in txs {
                ledger.add(&month, tx)?;
            }
        }
        log::info!("📂 Loaded {} transactions from ledger blob", ledger.len());
        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ledger() {
        let ledger = Ledger::sample();

        assert_eq!(ledger.len(), 8);
        assert_eq!(ledger.months(), vec!["January", "February", "October"]);
        assert_eq!(ledger.transactions_for("January").len(), 2);
        assert!(ledger.transactions_for("March").is_empty());
    }

    #[test]
    fn test_add_and_delete() {
        let mut ledger = Ledger::new();
        let tx = Transaction::expense("Food", 2023, 3, 4, "12:00", "Lunch", "15").unwrap();
        let id = tx.id.clone();

        ledger.add("march", tx).unwrap();
        assert_eq!(ledger.transactions_for("March").len(), 1);

        assert!(!ledger.delete("March", "missing"));
        assert!(ledger.delete("March", &id));
        assert!(ledger.is_empty());
        assert!(ledger.months().is_empty());
    }

    #[test]
    fn test_add_rejects_unknown_month() {
        let mut ledger = Ledger::new();
        let tx = Transaction::income("Gift", 2023, 1, 1, "", "", "5").unwrap();
        assert!(ledger.add("Smarch", tx).is_err());
    }

    #[test]
    fn test_totals_use_magnitudes() {
        let ledger = Ledger::sample();

        assert_eq!(ledger.income_total("February"), 3500.0);
        assert_eq!(ledger.expense_total("February"), 250.0);
        assert_eq!(ledger.expense_total("March"), 0.0);
    }

    #[test]
    fn test_filter_and_toggle() {
        let ledger = Ledger::sample();

        let incomes = ledger.filtered("October", TypeFilter::Income);
        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].title, "Bonus");
        assert_eq!(ledger.filtered("October", TypeFilter::All).len(), 3);

        assert_eq!(TypeFilter::All.toggled(TypeFilter::Income), TypeFilter::Income);
        assert_eq!(TypeFilter::Income.toggled(TypeFilter::Income), TypeFilter::All);
        assert_eq!(TypeFilter::Income.toggled(TypeFilter::Expense), TypeFilter::Expense);
        assert_eq!(TypeFilter::from_str_lenient("EXPENSE"), TypeFilter::Expense);
        assert_eq!(TypeFilter::from_str_lenient("whatever"), TypeFilter::All);
    }

    #[test]
    fn test_chart_over_month_view() {
        let ledger = Ledger::sample();

        let series = ledger.chart("January", TypeFilter::All, Granularity::Month).unwrap();
        assert_eq!(series.labels, vec!["Jan"]);
        assert_eq!(series.values, vec![2950.0]);

        let series = ledger.chart("February", TypeFilter::Expense, Granularity::Today).unwrap();
        assert_eq!(series.labels, vec!["18:00 PM", "20:00 PM"]);

        assert!(ledger.chart("March", TypeFilter::All, Granularity::Year).is_none());
    }

    #[test]
    fn test_json_round_trip_and_month_merge() {
        let ledger = Ledger::sample();
        let json = ledger.to_json().unwrap();
        let restored = Ledger::from_json(&json).unwrap();
        assert_eq!(restored, ledger);

        let raw = r#"{
            "january": [{"id":"a","title":"Gift","amount":"+5","type":"income","date":"2023-01-01"}],
            "January": [{"id":"b","title":"Food","amount":"-2","type":"expense"}]
        }"#;
        let merged = Ledger::from_json(raw).unwrap();
        assert_eq!(merged.transactions_for("January").len(), 2);
        assert!(Ledger::from_json("not json").is_err());
    }
}
