// 🧾 Bill Entity - upcoming bills and payments
//
// A bill is saved through a single upsert: blank id → new bill with a fresh
// id, known id → replaced in place. The whole book serializes as a JSON array.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// BILL ENTITY
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Empty until the bill is first saved
    #[serde(default)]
    pub id: String,

    pub title: String,

    pub amount: String,

    /// Due date, "YYYY-MM-DD"
    pub date: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub notifications_enabled: bool,

    #[serde(default)]
    pub notification_date: String,

    /// Reminder time, "HH:MM"
    #[serde(default)]
    pub notification_time: String,
}

impl Bill {
    pub fn new(title: &str, amount: &str, date: &str) -> Self {
        Bill {
            title: title.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    /// Turn on a reminder at the given date and clamped time
    pub fn with_notification(mut self, date: &str, hours: i64, minutes: i64) -> Self {
        self.notifications_enabled = true;
        self.notification_date = date.to_string();
        self.notification_time = normalize_time(hours, minutes);
        self
    }
}

/// Clamp to a valid clock time and format as "HH:MM"
pub fn normalize_time(hours: i64, minutes: i64) -> String {
    let hh = hours.clamp(0, 23);
    let mm = minutes.clamp(0, 59);
    format!("{:02}:{:02}", hh, mm)
}

/// Split "HH:MM" into numbers; unreadable parts become 0
pub fn parse_time(time: &str) -> (i64, i64) {
    let mut parts = time.split(':');
    let mut next = || {
        parts
            .next()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(0)
    };
    let hours = next();
    let minutes = next();
    (hours, minutes)
}

// ============================================================================
// BILL BOOK
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillBook {
    bills: Vec<Bill>,
}

impl BillBook {
    pub fn new() -> Self {
        BillBook::default()
    }

    /// Insert or replace; returns the bill's id
    pub fn save(&mut self, mut bill: Bill) -> String {
        if bill.id.is_empty() {
            bill.id = uuid::Uuid::new_v4().to_string();
        }
        let id = bill.id.clone();

        match self.bills.iter_mut().find(|b| b.id == id) {
            Some(existing) => {
                log::debug!("✏️  Updating bill {}", id);
                *existing = bill;
            }
            None => {
                log::debug!("➕ Adding bill {}", id);
                self.bills.push(bill);
            }
        }
        id
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.bills.len();
        self.bills.retain(|b| b.id != id);
        self.bills.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Bill> {
        self.bills.iter().find(|b| b.id == id)
    }

    pub fn list(&self) -> &[Bill] {
        &self.bills
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.bills).context("Failed to serialize bills")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let bills: Vec<Bill> = serde_json::from_str(json).context("Failed to parse bills JSON")?;
        Ok(BillBook { bills })
    }
}
