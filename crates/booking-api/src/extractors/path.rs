//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use booking_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with teacher_id
#[derive(Debug, serde::Deserialize)]
pub struct TeacherIdPath {
    pub teacher_id: String,
}

impl TeacherIdPath {
    /// Parse teacher_id as Snowflake
    pub fn teacher_id(&self) -> Result<Snowflake, ApiError> {
        self.teacher_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid teacher_id format"))
    }
}

/// Path parameters with appointment_id
#[derive(Debug, serde::Deserialize)]
pub struct AppointmentIdPath {
    pub appointment_id: String,
}

impl AppointmentIdPath {
    /// Parse appointment_id as Snowflake
    pub fn appointment_id(&self) -> Result<Snowflake, ApiError> {
        self.appointment_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid appointment_id format"))
    }
}
