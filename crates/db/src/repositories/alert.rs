//! Alert repository for dashboard notification CRUD.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{alerts, sea_orm_active_enums::AlertSeverity};
use hostelops_shared::types::PageRequest;

/// Error types for alert operations.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    /// Alert not found.
    #[error("Alert not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating an alert.
#[derive(Debug, Clone)]
pub struct CreateAlertInput {
    /// Short headline.
    pub title: String,
    /// Full alert text.
    pub message: String,
    /// Severity level.
    pub severity: AlertSeverity,
}

/// Optional filters for listing alerts.
#[derive(Debug, Clone, Default)]
pub struct AlertFilter {
    /// Restrict to one severity.
    pub severity: Option<AlertSeverity>,
    /// Restrict to resolved/unresolved alerts.
    pub resolved: Option<bool>,
}

/// Alert repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct AlertRepository {
    db: DatabaseConnection,
}

impl AlertRepository {
    /// Creates a new alert repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an alert.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(&self, input: CreateAlertInput) -> Result<alerts::Model, AlertError> {
        let now = Utc::now();

        let alert = alerts::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            message: Set(input.message),
            severity: Set(input.severity),
            resolved: Set(false),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        Ok(alert.insert(&self.db).await?)
    }

    /// Lists alerts newest-first with pagination, returning the page and the
    /// total match count.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub async fn list(
        &self,
        filter: &AlertFilter,
        page: &PageRequest,
    ) -> Result<(Vec<alerts::Model>, u64), AlertError> {
        let mut query = alerts::Entity::find();

        if let Some(severity) = filter.severity {
            query = query.filter(alerts::Column::Severity.eq(severity));
        }
        if let Some(resolved) = filter.resolved {
            query = query.filter(alerts::Column::Resolved.eq(resolved));
        }

        let total = query.clone().count(&self.db).await?;

        let items = query
            .order_by_desc(alerts::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((items, total))
    }

    /// Finds an alert by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<alerts::Model>, AlertError> {
        Ok(alerts::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Marks an alert as resolved.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no alert exists with the given id.
    pub async fn resolve(&self, id: Uuid) -> Result<alerts::Model, AlertError> {
        let alert = alerts::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AlertError::NotFound(id))?;

        let mut active: alerts::ActiveModel = alert.into();
        active.resolved = Set(true);
        active.updated_at = Set(Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes an alert.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no alert exists with the given id.
    pub async fn delete(&self, id: Uuid) -> Result<(), AlertError> {
        let result = alerts::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AlertError::NotFound(id));
        }
        Ok(())
    }
}
