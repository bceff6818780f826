//! Appointment entity <-> model mapper

use booking_core::entities::{Appointment, CreatedBy, StudentInfo};
use booking_core::error::DomainError;
use booking_core::value_objects::{AppointmentStatus, Snowflake};

use crate::models::AppointmentModel;

/// Convert AppointmentModel to Appointment entity.
///
/// Fails if the stored status or creator strings are unknown; the CHECK
/// constraints make that unreachable outside of manual data edits.
impl TryFrom<AppointmentModel> for Appointment {
    type Error = DomainError;

    fn try_from(model: AppointmentModel) -> Result<Self, Self::Error> {
        Ok(Appointment {
            id: Snowflake::new(model.id),
            teacher_id: Snowflake::new(model.teacher_id),
            student: StudentInfo {
                name: model.student_name,
                email: model.student_email,
                phone: model.student_phone,
            },
            student_account_id: model.student_account_id.map(Snowflake::new),
            date: model.date,
            day: model.day,
            time: model.time_slot,
            status: AppointmentStatus::parse(&model.status)?,
            created_by: CreatedBy::parse(&model.created_by)?,
            response_message: model.response_message,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
