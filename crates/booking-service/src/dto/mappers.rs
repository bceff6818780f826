//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use booking_core::entities::{Account, Appointment, SetupToken, Teacher};

use super::responses::{
    AccountResponse, AppointmentResponse, SetupTokenResponse, TeacherResponse,
};

// ============================================================================
// Account Mappers
// ============================================================================

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
            created_at: account.created_at,
        }
    }
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self::from(&account)
    }
}

// ============================================================================
// Teacher Mappers
// ============================================================================

impl From<&Teacher> for TeacherResponse {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id.to_string(),
            name: teacher.name.clone(),
            email: teacher.email.clone(),
            department: teacher.department.clone(),
            subject: teacher.subject.clone(),
            experience_years: teacher.experience_years,
            qualification: teacher.qualification.clone(),
            bio: teacher.bio.clone(),
            availability: teacher.availability.clone(),
            has_account: teacher.has_account,
            created_at: teacher.created_at,
            updated_at: teacher.updated_at,
        }
    }
}

impl From<Teacher> for TeacherResponse {
    fn from(teacher: Teacher) -> Self {
        Self::from(&teacher)
    }
}

// ============================================================================
// Setup Token Mappers
// ============================================================================

impl From<&SetupToken> for SetupTokenResponse {
    fn from(token: &SetupToken) -> Self {
        Self {
            token: token.code.clone(),
            teacher_id: token.teacher_id.to_string(),
            expires_at: token.expires_at,
        }
    }
}

impl From<SetupToken> for SetupTokenResponse {
    fn from(token: SetupToken) -> Self {
        Self::from(&token)
    }
}

// ============================================================================
// Appointment Mappers
// ============================================================================

impl From<&Appointment> for AppointmentResponse {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.to_string(),
            teacher_id: appointment.teacher_id.to_string(),
            student_name: appointment.student.name.clone(),
            student_email: appointment.student.email.clone(),
            student_phone: appointment.student.phone.clone(),
            student_account_id: appointment.student_account_id.map(|id| id.to_string()),
            date: appointment.date,
            day: appointment.day.clone(),
            time: appointment.time.clone(),
            status: appointment.status,
            created_by: appointment.created_by,
            response_message: appointment.response_message.clone(),
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self::from(&appointment)
    }
}
