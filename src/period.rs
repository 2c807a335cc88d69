// 📅 Period Keys - granularity selection and bucket labels
//
// Every transaction maps to one bucket label per granularity:
//   Today → raw "HH:MM" time
//   Week  → "Week N" (ISO-8601 week number)
//   Month → "Jan".."Dec"
//   Year  → "2023"
// Labels are compared chronologically, not lexically.

use crate::transaction::{Transaction, DEFAULT_TIME};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Month abbreviations in calendar order
pub const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEK_PREFIX: &str = "Week ";

// ============================================================================
// GRANULARITY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Today,
    Week,
    Month,
    Year,

    /// Unrecognized selector: bucket by the raw date string
    Date,
}

impl Granularity {
    /// The four selectable tabs, in display order
    pub const TABS: [Granularity; 4] = [
        Granularity::Today,
        Granularity::Week,
        Granularity::Month,
        Granularity::Year,
    ];

    /// Map a tab label to a granularity, falling back to `Date`
    pub fn from_tab(tab: &str) -> Self {
        match tab.trim().to_lowercase().as_str() {
            "today" | "day" => Granularity::Today,
            "week" => Granularity::Week,
            "month" => Granularity::Month,
            "year" => Granularity::Year,
            _ => Granularity::Date,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Today => "Today",
            Granularity::Week => "Week",
            Granularity::Month => "Month",
            Granularity::Year => "Year",
            Granularity::Date => "Date",
        }
    }

    /// Bucket label for a transaction, None when it has no usable date
    pub fn key_for(&self, tx: &Transaction) -> Option<String> {
        let date = tx.parsed_date()?;

        let key = match self {
            Granularity::Today => tx
                .time
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TIME)
                .to_string(),
            Granularity::Week => format!("{}{}", WEEK_PREFIX, date.iso_week().week()),
            Granularity::Month => MONTHS_SHORT[date.month0() as usize].to_string(),
            Granularity::Year => format!("{:04}", date.year()),
            Granularity::Date => tx.date.as_deref().unwrap_or_default().trim().to_string(),
        };

        Some(key)
    }

    /// Chronological comparator for labels produced by `key_for`
    ///
    /// Labels that cannot be decoded sort after decodable ones, then lexically.
    pub fn compare_keys(&self, a: &str, b: &str) -> Ordering {
        let rank: fn(&str) -> Option<u32> = match self {
            Granularity::Today => minutes_since_midnight,
            Granularity::Week => week_number,
            Granularity::Month => month_index,
            Granularity::Year => |k: &str| k.trim().parse::<u32>().ok(),
            Granularity::Date => return a.cmp(b),
        };

        match (rank(a), rank(b)) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// KEY DECODERS
// ============================================================================

/// "HH:MM" → minutes since midnight
///
/// Only the leading digits of each part count, so "19:00 PM" reads as 19:00.
pub fn minutes_since_midnight(key: &str) -> Option<u32> {
    let (hours, minutes) = key.trim().split_once(':')?;
    let hours = leading_number(hours)?;
    let minutes = leading_number(minutes)?;
    Some(hours * 60 + minutes)
}

/// "Week N" → N
pub fn week_number(key: &str) -> Option<u32> {
    key.strip_prefix(WEEK_PREFIX)?.trim().parse().ok()
}

/// "Jan".."Dec" → 0..11
pub fn month_index(key: &str) -> Option<u32> {
    MONTHS_SHORT
        .iter()
        .position(|m| *m == key)
        .map(|i| i as u32)
}

fn leading_number(s: &str) -> Option<u32> {
    let s = s.trim();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionType;

    fn tx_on(date: Option<&str>, time: Option<&str>) -> Transaction {
        Transaction {
            id: "t".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            amount: "+1".to_string(),
            time: time.map(str::to_string),
            tx_type: TransactionType::Income,
            date: date.map(str::to_string),
            category: None,
        }
    }

    #[test]
    fn test_from_tab() {
        assert_eq!(Granularity::from_tab("Today"), Granularity::Today);
        assert_eq!(Granularity::from_tab("week"), Granularity::Week);
        assert_eq!(Granularity::from_tab(" MONTH "), Granularity::Month);
        assert_eq!(Granularity::from_tab("Year"), Granularity::Year);
        assert_eq!(Granularity::from_tab("Quarter"), Granularity::Date);
    }

    #[test]
    fn test_keys_per_granularity() {
        let tx = tx_on(Some("2023-02-17"), Some("18:00"));

        assert_eq!(Granularity::Today.key_for(&tx).as_deref(), Some("18:00"));
        assert_eq!(Granularity::Week.key_for(&tx).as_deref(), Some("Week 7"));
        assert_eq!(Granularity::Month.key_for(&tx).as_deref(), Some("Feb"));
        assert_eq!(Granularity::Year.key_for(&tx).as_deref(), Some("2023"));
        assert_eq!(Granularity::Date.key_for(&tx).as_deref(), Some("2023-02-17"));
    }

    #[test]
    fn test_today_defaults_missing_time() {
        let tx = tx_on(Some("2023-02-17"), None);
        assert_eq!(Granularity::Today.key_for(&tx).as_deref(), Some("00:00"));
    }

    #[test]
    fn test_missing_date_has_no_key() {
        let tx = tx_on(None, Some("10:00"));
        for g in Granularity::TABS {
            assert!(g.key_for(&tx).is_none());
        }

        let tx = tx_on(Some("2023-13-45"), Some("10:00"));
        assert!(Granularity::Month.key_for(&tx).is_none());
    }

    #[test]
    fn test_date_fallback_requires_parseable_date() {
        let tx = tx_on(Some("2023-1-5"), None);
        assert_eq!(Granularity::Date.key_for(&tx).as_deref(), Some("2023-1-5"));

        // Present but not YYYY-MM-DD: dropped, same as a missing date
        let tx = tx_on(Some("Oct 5, 2023"), None);
        assert!(Granularity::Date.key_for(&tx).is_none());
    }

    #[test]
    fn test_iso_week_edges() {
        // Monday 2023-01-02 opens ISO week 1
        let tx = tx_on(Some("2023-01-02"), None);
        assert_eq!(Granularity::Week.key_for(&tx).as_deref(), Some("Week 1"));

        // Sunday 2023-01-01 still belongs to week 52 of 2022
        let tx = tx_on(Some("2023-01-01"), None);
        assert_eq!(Granularity::Week.key_for(&tx).as_deref(), Some("Week 52"));

        // 2020-12-31 is a Thursday in week 53
        let tx = tx_on(Some("2020-12-31"), None);
        assert_eq!(Granularity::Week.key_for(&tx).as_deref(), Some("Week 53"));
    }

    #[test]
    fn test_compare_keys_chronological() {
        assert_eq!(Granularity::Month.compare_keys("Feb", "Jan"), Ordering::Greater);
        assert_eq!(Granularity::Month.compare_keys("Apr", "Mar"), Ordering::Greater);
        assert_eq!(Granularity::Week.compare_keys("Week 10", "Week 9"), Ordering::Greater);
        assert_eq!(Granularity::Today.compare_keys("9:30", "10:00"), Ordering::Less);
        assert_eq!(Granularity::Year.compare_keys("2023", "2022"), Ordering::Greater);
        assert_eq!(Granularity::Date.compare_keys("2023-10-01", "2023-2-01"), Ordering::Less);
    }

    #[test]
    fn test_undecodable_keys_sort_last() {
        assert_eq!(Granularity::Today.compare_keys("noon", "23:59"), Ordering::Greater);
        assert_eq!(Granularity::Month.compare_keys("Dec", "???"), Ordering::Less);
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(minutes_since_midnight("00:00"), Some(0));
        assert_eq!(minutes_since_midnight("19:00 PM"), Some(1140));
        assert_eq!(minutes_since_midnight("7:05"), Some(425));
        assert_eq!(minutes_since_midnight("1900"), None);
    }
}
