//! Teacher database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for teachers table
#[derive(Debug, Clone, FromRow)]
pub struct TeacherModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub subject: String,
    pub experience_years: i32,
    pub qualification: String,
    pub bio: Option<String>,
    pub availability: Vec<String>,
    pub password_hash: Option<String>,
    pub has_account: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
