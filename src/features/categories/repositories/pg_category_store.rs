use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{
    Category, CategoryChanges, CategoryFilter, CreateCategory,
};

use super::CategoryStore;

const CATEGORY_COLUMNS: &str =
    "id, name, url_rewrite_name, is_deleted, created_at, updated_at";

/// PostgreSQL-backed category store
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append ` WHERE TRUE` and one ` AND` clause per set field of `filter`.
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &CategoryFilter) {
    qb.push(" WHERE TRUE");
    if let Some(id) = filter.id {
        qb.push(" AND id = ").push_bind(id);
    }
    if let Some(is_deleted) = filter.is_deleted {
        qb.push(" AND is_deleted = ").push_bind(is_deleted);
    }
}

fn select_query(filter: &CategoryFilter, tail: &str) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM categories", CATEGORY_COLUMNS));
    push_filter(&mut qb, filter);
    qb.push(tail);
    qb
}

/// `UPDATE` touching only rows whose values really change, `None` when
/// there is nothing to set.
fn update_query(
    filter: &CategoryFilter,
    changes: &CategoryChanges,
) -> Option<QueryBuilder<'static, Postgres>> {
    if changes.is_empty() {
        return None;
    }

    let mut qb = QueryBuilder::new("UPDATE categories SET updated_at = NOW()");
    if let Some(name) = &changes.name {
        qb.push(", name = ").push_bind(name.clone());
    }
    if let Some(url_rewrite_name) = &changes.url_rewrite_name {
        qb.push(", url_rewrite_name = ").push_bind(url_rewrite_name.clone());
    }
    if let Some(is_deleted) = changes.is_deleted {
        qb.push(", is_deleted = ").push_bind(is_deleted);
    }
    push_filter(&mut qb, filter);

    qb.push(" AND (FALSE");
    if let Some(name) = &changes.name {
        qb.push(" OR name IS DISTINCT FROM ").push_bind(name.clone());
    }
    if let Some(url_rewrite_name) = &changes.url_rewrite_name {
        qb.push(" OR url_rewrite_name IS DISTINCT FROM ")
            .push_bind(url_rewrite_name.clone());
    }
    if let Some(is_deleted) = changes.is_deleted {
        qb.push(" OR is_deleted IS DISTINCT FROM ").push_bind(is_deleted);
    }
    qb.push(")");

    Some(qb)
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn find(&self, filter: &CategoryFilter) -> Result<Vec<Category>> {
        select_query(filter, " ORDER BY created_at")
            .build_query_as::<Category>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_one(&self, filter: &CategoryFilter) -> Result<Option<Category>> {
        select_query(filter, " ORDER BY created_at LIMIT 1")
            .build_query_as::<Category>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find category: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn create(&self, data: &CreateCategory) -> Result<Category> {
        let query = format!(
            r#"
            INSERT INTO categories (id, name, url_rewrite_name, is_deleted)
            VALUES ($1, $2, $3, FALSE)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&query)
            .bind(Uuid::now_v7())
            .bind(&data.name)
            .bind(&data.url_rewrite_name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create category: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, filter: &CategoryFilter, changes: &CategoryChanges) -> Result<u64> {
        let Some(mut qb) = update_query(filter, changes) else {
            return Ok(0);
        };

        let result = qb.build().execute(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to update category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_with_empty_and_full_filters() {
        assert_eq!(
            select_query(&CategoryFilter::default(), " ORDER BY created_at").sql(),
            format!(
                "SELECT {} FROM categories WHERE TRUE ORDER BY created_at",
                CATEGORY_COLUMNS
            )
        );

        let live_one = CategoryFilter::live().with_id(Uuid::now_v7());
        assert_eq!(
            select_query(&live_one, " ORDER BY created_at LIMIT 1").sql(),
            format!(
                "SELECT {} FROM categories WHERE TRUE AND id = $1 AND is_deleted = $2 \
                 ORDER BY created_at LIMIT 1",
                CATEGORY_COLUMNS
            )
        );
    }

    #[test]
    fn test_rename_guards_on_every_changed_column() {
        let changes = CategoryChanges {
            name: Some("Garden tools".to_string()),
            url_rewrite_name: Some("garden-tools".to_string()),
            ..Default::default()
        };

        let qb = update_query(&CategoryFilter::by_id(Uuid::now_v7()), &changes).unwrap();
        assert_eq!(
            qb.sql(),
            "UPDATE categories SET updated_at = NOW(), name = $1, url_rewrite_name = $2 \
             WHERE TRUE AND id = $3 \
             AND (FALSE OR name IS DISTINCT FROM $4 OR url_rewrite_name IS DISTINCT FROM $5)"
        );
    }

    #[test]
    fn test_unfiltered_soft_delete_still_skips_deleted_rows() {
        let changes = CategoryChanges {
            is_deleted: Some(true),
            ..Default::default()
        };

        let qb = update_query(&CategoryFilter::default(), &changes).unwrap();
        assert_eq!(
            qb.sql(),
            "UPDATE categories SET updated_at = NOW(), is_deleted = $1 \
             WHERE TRUE AND (FALSE OR is_deleted IS DISTINCT FROM $2)"
        );
    }

    #[test]
    fn test_empty_changes_build_no_update() {
        assert!(update_query(&CategoryFilter::live(), &CategoryChanges::default()).is_none());
    }
}
