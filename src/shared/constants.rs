use crate::shared::validation::{FieldRule, Rule};

/// Rules for the category name field, applied on create and on edit
pub const CATEGORY_NAME_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        rule: Rule::NotEmpty,
        message: "Name must not be empty",
    },
    FieldRule {
        field: "name",
        rule: Rule::Length { min: 5, max: 32 },
        message: "Name must be between 5 and 32 characters",
    },
];

// =============================================================================
// ROUTES
// =============================================================================

pub const CATEGORY_LIST_PATH: &str = "/admin/category/list";
pub const CATEGORY_CREATE_PATH: &str = "/admin/category/create";
pub const ORDER_LIST_PATH: &str = "/admin/order/list";

/// Path of the category edit screen
pub fn category_edit_path(id: &str) -> String {
    format!("/admin/category/edit/{}", id)
}

/// Path of the order detail screen
pub fn order_detail_path(id: &str) -> String {
    format!("/admin/order/detail/{}", id)
}
