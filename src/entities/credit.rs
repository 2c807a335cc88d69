// 📊 Credit Rating - a single self-reported credit record
//
// There is at most one record. It starts empty and is replaced on every save.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// CREDIT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CreditStatus {
    Active,
    Closed,
    #[default]
    None,
}

impl CreditStatus {
    pub const ALL: [CreditStatus; 3] = [CreditStatus::Active, CreditStatus::Closed, CreditStatus::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreditStatus::Active => "Active",
            CreditStatus::Closed => "Closed",
            CreditStatus::None => "None",
        }
    }
}

// ============================================================================
// CREDIT RECORD
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRecord {
    pub credit_score: String,
    pub total_debt: String,
    #[serde(default)]
    pub credit_status: CreditStatus,
    #[serde(default)]
    pub payment_history: String,
    #[serde(default)]
    pub other_credits: String,
    /// Second free-text payment history note
    #[serde(default)]
    pub payment_history2: String,
    #[serde(default)]
    pub credit_goals: String,
}

impl CreditRecord {
    pub fn new(credit_score: &str, total_debt: &str) -> Self {
        CreditRecord {
            credit_score: credit_score.to_string(),
            total_debt: total_debt.to_string(),
            ..Default::default()
        }
    }
}

// ============================================================================
// CREDIT RATING
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditRating {
    record: Option<CreditRecord>,
}

impl CreditRating {
    pub fn new() -> Self {
        CreditRating::default()
    }

    /// Replace the record; score and total debt are required
    pub fn save(&mut self, record: CreditRecord) -> Result<()> {
        if record.credit_score.trim().is_empty() || record.total_debt.trim().is_empty() {
            bail!("Credit score and total debt amount are required");
        }

        log::debug!("💳 Saving credit record (status {})", record.credit_status.as_str());
        self.record = Some(record);
        Ok(())
    }

    pub fn record(&self) -> Option<&CreditRecord> {
        self.record.as_ref()
    }

    /// Copy of the current record to edit, or a blank one
    pub fn draft(&self) -> CreditRecord {
        self.record.clone().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_none()
    }
}
