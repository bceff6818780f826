//! Appointment database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for appointments table
#[derive(Debug, Clone, FromRow)]
pub struct AppointmentModel {
    pub id: i64,
    pub teacher_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: Option<String>,
    pub student_account_id: Option<i64>,
    pub date: NaiveDate,
    pub day: String,
    pub time_slot: String,
    pub status: String,
    pub created_by: String,
    pub response_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
