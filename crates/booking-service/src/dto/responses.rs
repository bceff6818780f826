//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use booking_core::{AppointmentStatus, CreatedBy, Role};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens and the authenticated principal
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub principal: PrincipalResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        principal: PrincipalResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            principal,
        }
    }
}

/// The profile behind a login: an account (admin/student) or a teacher
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PrincipalResponse {
    Account(AccountResponse),
    Teacher(TeacherResponse),
}

// ============================================================================
// Account Responses
// ============================================================================

/// Admin or student account response
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Teacher Responses
// ============================================================================

/// Teacher profile response
#[derive(Debug, Clone, Serialize)]
pub struct TeacherResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub subject: String,
    pub experience_years: i32,
    pub qualification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub availability: Vec<String>,
    pub has_account: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One-time setup token issued for a teacher
///
/// Returned to the admin in the API response; there is no e-mail delivery.
#[derive(Debug, Serialize)]
pub struct SetupTokenResponse {
    pub token: String,
    pub teacher_id: String,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

// ============================================================================
// Appointment Responses
// ============================================================================

/// Appointment response
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub teacher_id: String,
    pub student_name: String,
    pub student_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_account_id: Option<String>,
    pub date: NaiveDate,
    pub day: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub created_by: CreatedBy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
