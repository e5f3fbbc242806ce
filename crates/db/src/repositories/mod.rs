//! Repository abstractions for data access.

pub mod alert;
pub mod ledger;

pub use alert::AlertRepository;
pub use ledger::LedgerRepository;
