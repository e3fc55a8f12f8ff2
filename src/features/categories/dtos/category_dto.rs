use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::categories::models::Category;

/// Form body of the create and edit screens
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: String,
}

/// Category as shown on the admin screens
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: Uuid,
    pub name: String,
    pub url_rewrite_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Category> for CategoryView {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            url_rewrite_name: c.url_rewrite_name,
            created_at: c.created_at.format("%d/%m/%Y %H:%M").to_string(),
            updated_at: c.updated_at.format("%d/%m/%Y %H:%M").to_string(),
        }
    }
}
