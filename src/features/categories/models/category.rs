use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for category
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub url_rewrite_name: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for inserting a new category
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub url_rewrite_name: String,
}

/// Partial update of a category; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub url_rewrite_name: Option<String>,
    pub is_deleted: Option<bool>,
}

impl CategoryChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url_rewrite_name.is_none() && self.is_deleted.is_none()
    }

    /// Whether applying these changes to `category` would alter any stored value
    #[cfg(test)]
    pub fn alters(&self, category: &Category) -> bool {
        self.name.as_ref().is_some_and(|n| *n != category.name)
            || self
                .url_rewrite_name
                .as_ref()
                .is_some_and(|u| *u != category.url_rewrite_name)
            || self.is_deleted.is_some_and(|d| d != category.is_deleted)
    }
}

/// Equality filter over category columns; unset fields match anything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    pub id: Option<Uuid>,
    pub is_deleted: Option<bool>,
}

impl CategoryFilter {
    /// Categories that have not been soft deleted
    pub fn live() -> Self {
        Self {
            id: None,
            is_deleted: Some(false),
        }
    }

    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            is_deleted: None,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    #[cfg(test)]
    pub fn matches(&self, category: &Category) -> bool {
        self.id.is_none_or(|id| id == category.id)
            && self.is_deleted.is_none_or(|d| d == category.is_deleted)
    }
}
