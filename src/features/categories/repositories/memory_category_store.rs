use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::models::{
    Category, CategoryChanges, CategoryFilter, CreateCategory,
};

use super::CategoryStore;

/// Category store held in memory, in insertion order
#[derive(Default)]
pub struct InMemoryCategoryStore {
    records: RwLock<Vec<Category>>,
    writes: RwLock<u64>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored record, soft deleted ones included
    pub async fn all(&self) -> Vec<Category> {
        self.records.read().await.clone()
    }

    /// Number of create/update calls that reached the store
    pub async fn write_count(&self) -> u64 {
        *self.writes.read().await
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn find(&self, filter: &CategoryFilter) -> Result<Vec<Category>> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|c| filter.matches(c)).cloned().collect())
    }

    async fn find_one(&self, filter: &CategoryFilter) -> Result<Option<Category>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|c| filter.matches(c)).cloned())
    }

    async fn create(&self, data: &CreateCategory) -> Result<Category> {
        *self.writes.write().await += 1;

        let now = Utc::now();
        let category = Category {
            id: Uuid::now_v7(),
            name: data.name.clone(),
            url_rewrite_name: data.url_rewrite_name.clone(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.push(category.clone());
        Ok(category)
    }

    async fn update(&self, filter: &CategoryFilter, changes: &CategoryChanges) -> Result<u64> {
        *self.writes.write().await += 1;

        let mut records = self.records.write().await;
        let mut modified = 0;
        for category in records
            .iter_mut()
            .filter(|c| filter.matches(c) && changes.alters(c))
        {
            if let Some(name) = &changes.name {
                category.name = name.clone();
            }
            if let Some(url_rewrite_name) = &changes.url_rewrite_name {
                category.url_rewrite_name = url_rewrite_name.clone();
            }
            if let Some(is_deleted) = changes.is_deleted {
                category.is_deleted = is_deleted;
            }
            category.updated_at = Utc::now();
            modified += 1;
        }
        Ok(modified)
    }
}
