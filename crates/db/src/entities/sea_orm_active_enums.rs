//! `SeaORM` active enum definitions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Alert severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "alert_severity")]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Informational notice.
    #[sea_orm(string_value = "info")]
    Info,
    /// Needs attention soon.
    #[sea_orm(string_value = "warning")]
    Warning,
    /// Needs attention now.
    #[sea_orm(string_value = "critical")]
    Critical,
}
