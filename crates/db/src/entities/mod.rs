//! `SeaORM` entity definitions.

pub mod alerts;
pub mod ledger_records;
pub mod sea_orm_active_enums;
