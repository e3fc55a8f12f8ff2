use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Redirect, Response},
};
use minijinja::context;

use crate::core::error::Result;
use crate::core::extractor::{AppForm, RecordId};
use crate::features::auth::guards::RequireAdmin;
use crate::features::categories::dtos::{CategoryForm, CategoryView};
use crate::features::categories::services::{
    CategoryService, CreateCategoryOutcome, DeleteCategoryOutcome, UpdateCategoryOutcome,
};
use crate::shared::constants::{category_edit_path, CATEGORY_CREATE_PATH, CATEGORY_LIST_PATH};
use crate::shared::flash::{self, Flash, Notice};
use crate::shared::page;

pub async fn index(RequireAdmin(_admin): RequireAdmin) -> Redirect {
    Redirect::to(CATEGORY_LIST_PATH)
}

/// List all live categories
pub async fn list_categories(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    flash: Flash,
) -> Result<Response> {
    let categories: Vec<CategoryView> = service
        .list()
        .await?
        .into_iter()
        .map(CategoryView::from)
        .collect();

    page::render(
        StatusCode::OK,
        "admin/category/list.html",
        context! { categories },
        &flash,
    )
}

/// Show the empty create form
pub async fn create_form(RequireAdmin(_admin): RequireAdmin, flash: Flash) -> Result<Response> {
    page::render(
        StatusCode::OK,
        "admin/category/create.html",
        context! { form => CategoryForm::default() },
        &flash,
    )
}

/// Create a category, or show the form again with its errors
pub async fn create_category(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    flash: Flash,
    AppForm(form): AppForm<CategoryForm>,
) -> Result<Response> {
    match service.create(&form.name).await? {
        CreateCategoryOutcome::Created(category) => {
            tracing::info!(admin = %admin.username, category_id = %category.id, "Category added");
            Ok(flash::redirect(CATEGORY_CREATE_PATH, Notice::Added))
        }
        CreateCategoryOutcome::Rejected(errors) => page::render(
            StatusCode::UNPROCESSABLE_ENTITY,
            "admin/category/create.html",
            context! { errors, form },
            &flash,
        ),
    }
}

/// Show the edit form of a live category
pub async fn edit_form(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Result<Response> {
    let category = match id {
        Some(id) => service.get_for_edit(id).await?,
        None => None,
    };
    let Some(category) = category else {
        return Ok(flash::redirect(CATEGORY_LIST_PATH, Notice::InvalidInput));
    };

    page::render(
        StatusCode::OK,
        "admin/category/edit.html",
        context! { category => CategoryView::from(category) },
        &flash,
    )
}

/// Rename a category, or show the form again with its errors
pub async fn update_category(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    RecordId(id): RecordId,
    flash: Flash,
    AppForm(form): AppForm<CategoryForm>,
) -> Result<Response> {
    let Some(id) = id else {
        return Ok(flash::redirect(CATEGORY_LIST_PATH, Notice::InvalidInput));
    };

    match service.update(id, &form.name).await? {
        UpdateCategoryOutcome::Updated => {
            tracing::info!(admin = %admin.username, category_id = %id, "Category edited");
            Ok(flash::redirect(
                &category_edit_path(&id.to_string()),
                Notice::Updated,
            ))
        }
        UpdateCategoryOutcome::Rejected { errors, current } => page::render(
            StatusCode::UNPROCESSABLE_ENTITY,
            "admin/category/edit.html",
            context! { category => CategoryView::from(current), errors },
            &flash,
        ),
        UpdateCategoryOutcome::NotFound => {
            Ok(flash::redirect(CATEGORY_LIST_PATH, Notice::InvalidInput))
        }
    }
}

/// Soft delete a category and go back to the list
pub async fn delete_category(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let outcome = match id {
        Some(id) => service.soft_delete(id).await?,
        None => DeleteCategoryOutcome::NotFound,
    };

    let notice = match outcome {
        DeleteCategoryOutcome::Deleted => {
            tracing::info!(admin = %admin.username, category_id = ?id, "Category deleted");
            Notice::Deleted
        }
        DeleteCategoryOutcome::NotFound => Notice::InvalidInput,
    };

    Ok(flash::redirect(CATEGORY_LIST_PATH, notice))
}
