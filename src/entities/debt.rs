// 🤝 Debt Entity - shared debts with participants
//
// Debts are tracked as unpaid/paid. Each debt carries the people involved
// and their share.

use serde::{Deserialize, Serialize};

// ============================================================================
// DEBT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    #[default]
    Unpaid,
    Paid,
}

impl DebtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtStatus::Unpaid => "unpaid",
            DebtStatus::Paid => "paid",
        }
    }
}

// ============================================================================
// PARTICIPANT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Identifier typed by the user, not generated
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub role: String,
    pub amount: String,
}

impl Participant {
    pub fn new(id: &str, name: &str, amount: &str) -> Self {
        Participant {
            id: id.to_string(),
            name: name.to_string(),
            surname: String::new(),
            role: String::new(),
            amount: amount.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        if self.surname.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.surname)
        }
    }
}

// ============================================================================
// DEBT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub amount: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub status: DebtStatus,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Debt {
    pub fn new(title: &str, amount: &str) -> Self {
        Debt {
            title: title.to_string(),
            amount: amount.to_string(),
            ..Default::default()
        }
    }

    pub fn add_participant(&mut self, participant: Participant) {
        self.participants.push(participant);
    }

    /// Remove by position; out-of-range indexes are ignored
    pub fn remove_participant(&mut self, index: usize) -> Option<Participant> {
        if index < self.participants.len() {
            Some(self.participants.remove(index))
        } else {
            None
        }
    }

    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            DebtStatus::Unpaid => DebtStatus::Paid,
            DebtStatus::Paid => DebtStatus::Unpaid,
        };
    }

    /// Sum of participant shares; unreadable shares count as zero
    pub fn participants_total(&self) -> f64 {
        self.participants
            .iter()
            .filter_map(|p| p.amount.trim().parse::<f64>().ok())
            .sum()
    }
}

// ============================================================================
// DEBT BOOK
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebtBook {
    debts: Vec<Debt>,
}

impl DebtBook {
    pub fn new() -> Self {
        DebtBook::default()
    }

    /// Insert or replace; returns the debt's id
    pub fn upsert(&mut self, mut debt: Debt) -> String {
        if debt.id.is_empty() {
            debt.id = uuid::Uuid::new_v4().to_string();
        }
        let id = debt.id.clone();

        if let Some(idx) = self.debts.iter().position(|d| d.id == id) {
            self.debts[idx] = debt;
        } else {
            self.debts.push(debt);
        }
        id
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.debts.len();
        self.debts.retain(|d| d.id != id);
        self.debts.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == id)
    }

    pub fn by_status(&self, status: DebtStatus) -> Vec<&Debt> {
        self.debts.iter().filter(|d| d.status == status).collect()
    }

    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_defaults_unpaid() {
        let debt = Debt::new("Trip", "600");
        assert_eq!(debt.status, DebtStatus::Unpaid);
        assert!(debt.id.is_empty());
        assert!(debt.participants.is_empty());
    }

    #[test]
    fn test_participants() {
        let mut debt = Debt::new("Trip", "600");
        debt.add_participant(Participant::new("p1", "Anna", "200"));
        let mut bob = Participant::new("p2", "Bob", "400");
        bob.surname = "Lee".to_string();
        debt.add_participant(bob);

        assert_eq!(debt.participants_total(), 600.0);
        assert_eq!(debt.participants[1].full_name(), "Bob Lee");

        assert!(debt.remove_participant(5).is_none());
        let removed = debt.remove_participant(0).unwrap();
        assert_eq!(removed.name, "Anna");
        assert_eq!(debt.participants.len(), 1);
    }

    #[test]
    fn test_upsert_and_status_tabs() {
        let mut book = DebtBook::new();
        let trip = book.upsert(Debt::new("Trip", "600"));
        book.upsert(Debt::new("Dinner", "80"));

        let mut paid = book.get(&trip).unwrap().clone();
        paid.toggle_status();
        assert_eq!(book.upsert(paid), trip);

        assert_eq!(book.len(), 2);
        assert_eq!(book.by_status(DebtStatus::Paid).len(), 1);
        assert_eq!(book.by_status(DebtStatus::Unpaid)[0].title, "Dinner");

        assert!(book.remove(&trip));
        assert!(!book.remove(&trip));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_json_shape() {
        let mut debt = Debt::new("Loan", "1000");
        debt.id = "d1".to_string();
        debt.start_date = "2023-01-01".to_string();

        let json = serde_json::to_value(&debt).unwrap();
        assert_eq!(json["status"], "unpaid");
        assert_eq!(json["startDate"], "2023-01-01");
    }
}
