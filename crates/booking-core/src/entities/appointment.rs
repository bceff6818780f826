//! Appointment entity - a booking between a student and a teacher

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::{AppointmentStatus, Snowflake};

/// Who created the appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatedBy {
    /// Student requested a slot; the appointment starts `pending`.
    Student,
    /// Teacher booked directly; the appointment starts `confirmed`.
    Teacher,
}

impl CreatedBy {
    /// Stable string form used in the database.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Parse from the stable string form.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            other => Err(DomainError::ValidationError(format!(
                "unknown creator kind: {other}"
            ))),
        }
    }
}

impl fmt::Display for CreatedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Student contact details embedded in an appointment.
///
/// Kept inline rather than as a foreign key so teachers can also book for
/// students who have no account in the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Appointment entity.
///
/// Appointments are never hard-deleted; cancellation is a status change so
/// the history stays queryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: Snowflake,
    pub teacher_id: Snowflake,
    pub student: StudentInfo,
    /// Set when the booking student has a registered account.
    pub student_account_id: Option<Snowflake>,
    pub date: NaiveDate,
    /// Weekday name, denormalized from `date` for display.
    pub day: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub created_by: CreatedBy,
    /// Message the teacher attached when responding (accept/reject/cancel).
    pub response_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Create a new Appointment. The initial status follows the creator:
    /// student requests start `pending`, teacher bookings start `confirmed`.
    pub fn new(
        id: Snowflake,
        teacher_id: Snowflake,
        student: StudentInfo,
        date: NaiveDate,
        time: String,
        created_by: CreatedBy,
    ) -> Self {
        let status = match created_by {
            CreatedBy::Student => AppointmentStatus::Pending,
            CreatedBy::Teacher => AppointmentStatus::Confirmed,
        };
        let now = Utc::now();
        Self {
            id,
            teacher_id,
            student,
            student_account_id: None,
            day: weekday_name(date).to_string(),
            date,
            time,
            status,
            created_by,
            response_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Link the appointment to a registered student account
    pub fn with_student_account(mut self, account_id: Snowflake) -> Self {
        self.student_account_id = Some(account_id);
        self
    }

    /// Apply a status transition, enforcing the lifecycle table.
    pub fn transition(
        &mut self,
        next: AppointmentStatus,
        message: Option<String>,
    ) -> Result<(), DomainError> {
        self.status = self.status.transition_to(next)?;
        if message.is_some() {
            self.response_message = message;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whether the appointment still occupies its teacher's time slot
    #[inline]
    pub fn holds_slot(&self) -> bool {
        self.status.holds_slot()
    }

    /// Whether the given account is the booking student
    pub fn is_booked_by(&self, account_id: Snowflake) -> bool {
        self.student_account_id == Some(account_id)
    }
}

/// English weekday name for a calendar date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> StudentInfo {
        StudentInfo {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: None,
        }
    }

    fn date() -> NaiveDate {
        // A Monday
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_student_request_starts_pending() {
        let appt = Appointment::new(
            Snowflake::new(1),
            Snowflake::new(2),
            student(),
            date(),
            "10:00 AM".to_string(),
            CreatedBy::Student,
        );
        assert_eq!(appt.status, AppointmentStatus::Pending);
        assert_eq!(appt.day, "Monday");
        assert!(appt.holds_slot());
    }

    #[test]
    fn test_teacher_booking_starts_confirmed() {
        let appt = Appointment::new(
            Snowflake::new(1),
            Snowflake::new(2),
            student(),
            date(),
            "10:00 AM".to_string(),
            CreatedBy::Teacher,
        );
        assert_eq!(appt.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn test_transition_records_message() {
        let mut appt = Appointment::new(
            Snowflake::new(1),
            Snowflake::new(2),
            student(),
            date(),
            "10:00 AM".to_string(),
            CreatedBy::Student,
        );
        appt.transition(
            AppointmentStatus::Confirmed,
            Some("See you then".to_string()),
        )
        .unwrap();
        assert_eq!(appt.status, AppointmentStatus::Confirmed);
        assert_eq!(appt.response_message.as_deref(), Some("See you then"));
    }

    #[test]
    fn test_transition_rejects_illegal_move() {
        let mut appt = Appointment::new(
            Snowflake::new(1),
            Snowflake::new(2),
            student(),
            date(),
            "10:00 AM".to_string(),
            CreatedBy::Student,
        );
        let err = appt
            .transition(AppointmentStatus::Completed, None)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        // Status unchanged on failure
        assert_eq!(appt.status, AppointmentStatus::Pending);
    }

    #[test]
    fn test_is_booked_by() {
        let appt = Appointment::new(
            Snowflake::new(1),
            Snowflake::new(2),
            student(),
            date(),
            "10:00 AM".to_string(),
            CreatedBy::Student,
        )
        .with_student_account(Snowflake::new(77));
        assert!(appt.is_booked_by(Snowflake::new(77)));
        assert!(!appt.is_booked_by(Snowflake::new(78)));
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()), "Saturday");
        assert_eq!(weekday_name(NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()), "Sunday");
    }
}
