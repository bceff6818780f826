//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request for admins and students
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub principal: PrincipalJson,
}

/// Principal returned from auth endpoints
///
/// Both account and teacher principals carry id/name/email; the
/// teacher-only fields stay None for accounts.
#[derive(Debug, Deserialize)]
pub struct PrincipalJson {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub department: Option<String>,
}

/// Create teacher request
#[derive(Debug, Serialize)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub email: String,
    pub department: String,
    pub subject: String,
    pub experience_years: i32,
    pub qualification: String,
    pub bio: Option<String>,
    pub availability: Vec<String>,
}

impl CreateTeacherRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Teacher {suffix}"),
            email: format!("teacher{suffix}@example.com"),
            department: "Mathematics".to_string(),
            subject: "Algebra".to_string(),
            experience_years: 7,
            qualification: "M.Sc. Mathematics".to_string(),
            bio: Some("Enjoys teaching proofs".to_string()),
            availability: vec!["10:00 AM".to_string(), "11:00 AM".to_string()],
        }
    }
}

/// Update teacher request
#[derive(Debug, Default, Serialize)]
pub struct UpdateTeacherRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<String>>,
}

/// Teacher response
#[derive(Debug, Deserialize)]
pub struct TeacherResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub subject: String,
    pub experience_years: i32,
    pub qualification: String,
    pub bio: Option<String>,
    pub availability: Vec<String>,
    pub has_account: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Setup token response
#[derive(Debug, Deserialize)]
pub struct SetupTokenResponse {
    pub token: String,
    pub teacher_id: String,
    pub expires_at: String,
}

/// Teacher activation request
#[derive(Debug, Serialize)]
pub struct ActivateTeacherRequest {
    pub token: String,
    pub password: String,
}

/// Student appointment request
#[derive(Debug, Serialize)]
pub struct RequestAppointmentRequest {
    pub teacher_id: String,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: Option<String>,
    pub date: String,
    pub time: String,
}

impl RequestAppointmentRequest {
    pub fn for_teacher(teacher_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            teacher_id: teacher_id.to_string(),
            student_name: format!("Student {suffix}"),
            student_email: format!("student{suffix}@example.com"),
            student_phone: Some("555-0101".to_string()),
            date: "2030-06-03".to_string(),
            time: "10:00 AM".to_string(),
        }
    }
}

/// Teacher direct booking request
#[derive(Debug, Serialize)]
pub struct BookAppointmentRequest {
    pub student_name: String,
    pub student_email: String,
    pub student_phone: Option<String>,
    pub date: String,
    pub time: String,
}

impl BookAppointmentRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            student_name: format!("Walk-in Student {suffix}"),
            student_email: format!("walkin{suffix}@example.com"),
            student_phone: None,
            date: "2030-06-04".to_string(),
            time: "11:00 AM".to_string(),
        }
    }
}

/// Appointment response
#[derive(Debug, Deserialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub teacher_id: String,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: Option<String>,
    pub student_account_id: Option<String>,
    pub date: String,
    pub day: String,
    pub time: String,
    pub status: String,
    pub created_by: String,
    pub response_message: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Respond request for appointment transitions
#[derive(Debug, Serialize)]
pub struct RespondRequest {
    pub message: Option<String>,
}

impl RespondRequest {
    pub fn with_message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
