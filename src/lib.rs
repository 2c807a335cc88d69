// Pocket Ledger - Core Library
// Exposes all modules for use in the CLI, app shells, and tests

pub mod transaction;
pub mod period;   // Period keys: Today / Week / Month / Year
pub mod chart;    // Chart series aggregation
pub mod ledger;   // Month-keyed transaction store
pub mod entities; // Bills, debts, credit rating, challenges
pub mod profile;
pub mod config;

// Re-export commonly used types
pub use transaction::{
    Transaction, TransactionType,
    INCOME_CATEGORIES, EXPENSE_CATEGORIES, DEFAULT_TIME,
};
pub use period::{Granularity, MONTHS_SHORT};
pub use chart::{build_chart_series, try_build_chart_series, aggregate, ChartSeries};
pub use ledger::{Ledger, TypeFilter, MONTHS, canonical_month};
pub use entities::{
    Bill, BillBook, normalize_time, parse_time,
    Debt, DebtBook, DebtStatus, Participant,
    Challenge, ChallengeBook, ChallengeMember, ChallengeTab,
    CreditRating, CreditRecord, CreditStatus,
};
pub use profile::{Profile, PROFILE_PHOTO_KEY};
pub use config::{AppConfig, ConfigError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
