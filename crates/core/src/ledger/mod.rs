//! Ledger record model and classification rules.

pub mod types;

pub use types::{ExpenseCategory, LedgerRecord, RecordType};
