//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying user input also
//! implement `Validate`.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request (admin or student portal)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 64, message = "Name must be 2-64 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Login request, shared by all three portals
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Teacher credential activation via one-time setup token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ActivateTeacherRequest {
    pub token: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

// ============================================================================
// Teacher Requests
// ============================================================================

/// Create teacher profile request (admin only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeacherRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Department must be 1-100 characters"))]
    pub department: String,

    #[validate(length(min = 1, max = 100, message = "Subject must be 1-100 characters"))]
    pub subject: String,

    #[validate(range(min = 0, max = 80, message = "Experience must be 0-80 years"))]
    pub experience_years: i32,

    #[validate(length(min = 1, max = 200, message = "Qualification must be 1-200 characters"))]
    pub qualification: String,

    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,

    /// Offered time-slot strings, e.g. `"10:00 AM"`
    #[serde(default)]
    pub availability: Vec<String>,
}

/// Update teacher profile request (admin or the teacher themself)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTeacherRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Department must be 1-100 characters"))]
    pub department: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Subject must be 1-100 characters"))]
    pub subject: Option<String>,

    #[validate(range(min = 0, max = 80, message = "Experience must be 0-80 years"))]
    pub experience_years: Option<i32>,

    #[validate(length(min = 1, max = 200, message = "Qualification must be 1-200 characters"))]
    pub qualification: Option<String>,

    /// New bio, or null to leave unchanged
    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,

    /// Replacement availability list, or null to leave unchanged
    pub availability: Option<Vec<String>>,
}

/// Query parameters for listing teachers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherListQuery {
    pub department: Option<String>,
    pub subject: Option<String>,
    /// Free-text search over name, department, and subject
    pub q: Option<String>,
}

// ============================================================================
// Appointment Requests
// ============================================================================

/// Student appointment request (starts pending)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RequestAppointmentRequest {
    /// Teacher Snowflake ID as string
    pub teacher_id: String,

    #[validate(length(min = 1, max = 100, message = "Student name must be 1-100 characters"))]
    pub student_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub student_email: String,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub student_phone: Option<String>,

    pub date: NaiveDate,

    #[validate(length(min = 1, max = 32, message = "Time slot must be 1-32 characters"))]
    pub time: String,
}

/// Teacher direct booking (starts confirmed, on the teacher's own calendar)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookAppointmentRequest {
    #[validate(length(min = 1, max = 100, message = "Student name must be 1-100 characters"))]
    pub student_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub student_email: String,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub student_phone: Option<String>,

    pub date: NaiveDate,

    #[validate(length(min = 1, max = 32, message = "Time slot must be 1-32 characters"))]
    pub time: String,
}

/// Optional message attached to accept/reject/cancel/complete
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RespondRequest {
    #[validate(length(max = 1000, message = "Message must be at most 1000 characters"))]
    pub message: Option<String>,
}

/// Query parameters for listing appointments
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentListQuery {
    /// Status filter (`pending`, `confirmed`, ...)
    pub status: Option<String>,
    pub date: Option<NaiveDate>,
}
