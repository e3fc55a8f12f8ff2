use serde::Serialize;

/// Back-office operator that passed the admin credential check
#[derive(Debug, Clone, Serialize)]
pub struct AdminUser {
    pub username: String,
}
