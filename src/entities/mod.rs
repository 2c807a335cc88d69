// Entity Models - bills, debts, credit rating and challenges
//
// Each entity has:
// - An id assigned on first save (the credit record is a singleton)
// - A book that owns the list and handles upsert/delete

pub mod bill;
pub mod challenge;
pub mod credit;
pub mod debt;

pub use bill::{normalize_time, parse_time, Bill, BillBook};
pub use challenge::{Challenge, ChallengeBook, ChallengeMember, ChallengeTab};
pub use credit::{CreditRating, CreditRecord, CreditStatus};
pub use debt::{Debt, DebtBook, DebtStatus, Participant};
