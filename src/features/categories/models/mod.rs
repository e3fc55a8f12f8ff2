mod category;

pub use category::{Category, CategoryChanges, CategoryFilter, CreateCategory};
