use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::models::{
    Category, CategoryChanges, CategoryFilter, CreateCategory,
};
use crate::features::categories::repositories::CategoryStore;
use crate::shared::constants::CATEGORY_NAME_RULES;
use crate::shared::slug::slugify;
use crate::shared::validation::{self, FieldErrors};

/// Result of a create submission
#[derive(Debug)]
pub enum CreateCategoryOutcome {
    Created(Category),
    Rejected(FieldErrors),
}

/// Result of an edit submission
#[derive(Debug)]
pub enum UpdateCategoryOutcome {
    Updated,
    /// The stored record is returned unchanged so the form can be shown again
    Rejected {
        errors: FieldErrors,
        current: Category,
    },
    NotFound,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteCategoryOutcome {
    Deleted,
    NotFound,
}

fn validate_name(name: &str) -> FieldErrors {
    validation::check(CATEGORY_NAME_RULES, |field| match field {
        "name" => Some(name),
        _ => None,
    })
}

/// Service for the category lifecycle: list, create, edit, soft delete
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// List all live categories
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.store.find(&CategoryFilter::live()).await
    }

    /// Validate and insert a new category
    pub async fn create(&self, name: &str) -> Result<CreateCategoryOutcome> {
        let errors = validate_name(name);
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "Category create rejected");
            return Ok(CreateCategoryOutcome::Rejected(errors));
        }

        let category = self
            .store
            .create(&CreateCategory {
                name: name.to_string(),
                url_rewrite_name: slugify(name),
            })
            .await?;

        tracing::info!(category_id = %category.id, slug = %category.url_rewrite_name, "Category created");
        Ok(CreateCategoryOutcome::Created(category))
    }

    /// Get a live category for the edit screen
    pub async fn get_for_edit(&self, id: Uuid) -> Result<Option<Category>> {
        self.store
            .find_one(&CategoryFilter::live().with_id(id))
            .await
    }

    /// Rename a live category, recomputing its URL rewrite name
    pub async fn update(&self, id: Uuid, name: &str) -> Result<UpdateCategoryOutcome> {
        let Some(current) = self.get_for_edit(id).await? else {
            tracing::warn!(category_id = %id, "Update of unknown or deleted category");
            return Ok(UpdateCategoryOutcome::NotFound);
        };

        let errors = validate_name(name);
        if !errors.is_empty() {
            return Ok(UpdateCategoryOutcome::Rejected { errors, current });
        }

        let changes = CategoryChanges {
            name: Some(name.to_string()),
            url_rewrite_name: Some(slugify(name)),
            ..Default::default()
        };
        self.store
            .update(&CategoryFilter::by_id(current.id), &changes)
            .await?;

        tracing::info!(category_id = %current.id, "Category updated");
        Ok(UpdateCategoryOutcome::Updated)
    }

    /// Soft delete a live category
    ///
    /// A category that is already deleted is reported as not found.
    pub async fn soft_delete(&self, id: Uuid) -> Result<DeleteCategoryOutcome> {
        let Some(current) = self.get_for_edit(id).await? else {
            return Ok(DeleteCategoryOutcome::NotFound);
        };

        let changes = CategoryChanges {
            is_deleted: Some(true),
            ..Default::default()
        };
        self.store
            .update(&CategoryFilter::by_id(current.id), &changes)
            .await?;

        tracing::info!(category_id = %current.id, "Category soft deleted");
        Ok(DeleteCategoryOutcome::Deleted)
    }
}
