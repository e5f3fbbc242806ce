//! `SeaORM` Entity for alerts table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::AlertSeverity;

/// One dashboard alert/notification.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alerts")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Short headline shown in the dashboard.
    pub title: String,
    /// Full alert text.
    pub message: String,
    /// Severity level.
    pub severity: AlertSeverity,
    /// Whether the alert has been resolved.
    pub resolved: bool,
    /// Row creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Row update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations (none).
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
