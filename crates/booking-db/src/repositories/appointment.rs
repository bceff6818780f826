//! PostgreSQL implementation of AppointmentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booking_core::entities::Appointment;
use booking_core::error::DomainError;
use booking_core::traits::{AppointmentFilter, AppointmentRepository, RepoResult};
use booking_core::value_objects::{AppointmentStatus, Snowflake};

use crate::models::AppointmentModel;

use super::error::{appointment_not_found, map_db_error, map_unique_violation};

const APPOINTMENT_COLUMNS: &str = r"
    id, teacher_id, student_name, student_email, student_phone, student_account_id,
    date, day, time_slot, status, created_by, response_message, created_at, updated_at
";

/// PostgreSQL implementation of AppointmentRepository
#[derive(Clone)]
pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    /// Create a new PgAppointmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Appointment>> {
        let result = sqlx::query_as::<_, AppointmentModel>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Appointment::try_from).transpose()
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, filter: &AppointmentFilter) -> RepoResult<Vec<Appointment>> {
        // NULL binds disable the corresponding predicate
        let rows = sqlx::query_as::<_, AppointmentModel>(&format!(
            r"
            SELECT {APPOINTMENT_COLUMNS}
            FROM appointments
            WHERE ($1::BIGINT IS NULL OR teacher_id = $1)
              AND ($2::BIGINT IS NULL OR student_account_id = $2)
              AND ($3::TEXT IS NULL OR status = $3)
              AND ($4::DATE IS NULL OR date = $4)
            ORDER BY date DESC, created_at DESC
            "
        ))
        .bind(filter.teacher_id.map(Snowflake::into_inner))
        .bind(filter.student_account_id.map(Snowflake::into_inner))
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    #[instrument(skip(self, appointment), fields(id = %appointment.id))]
    async fn create(&self, appointment: &Appointment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO appointments (id, teacher_id, student_name, student_email,
                                      student_phone, student_account_id, date, day, time_slot,
                                      status, created_by, response_message,
                                      created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(appointment.id.into_inner())
        .bind(appointment.teacher_id.into_inner())
        .bind(&appointment.student.name)
        .bind(&appointment.student.email)
        .bind(&appointment.student.phone)
        .bind(appointment.student_account_id.map(Snowflake::into_inner))
        .bind(appointment.date)
        .bind(&appointment.day)
        .bind(&appointment.time)
        .bind(appointment.status.as_str())
        .bind(appointment.created_by.as_str())
        .bind(&appointment.response_message)
        .bind(appointment.created_at)
        .bind(appointment.updated_at)
        .execute(&self.pool)
        .await
        // The partial unique index on live (teacher, date, time) rows
        .map_err(|e| map_unique_violation(e, || DomainError::SlotTaken))?;

        Ok(())
    }

    #[instrument(skip(self, response_message))]
    async fn transition(
        &self,
        id: Snowflake,
        expected: AppointmentStatus,
        next: AppointmentStatus,
        response_message: Option<&str>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE appointments
            SET status = $3,
                response_message = COALESCE($4, response_message),
                updated_at = NOW()
            WHERE id = $1 AND status = $2
            ",
        )
        .bind(id.into_inner())
        .bind(expected.as_str())
        .bind(next.as_str())
        .bind(response_message)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            // Distinguish "gone" from "a concurrent writer changed the status"
            let exists = sqlx::query_scalar::<_, bool>(
                r"SELECT EXISTS(SELECT 1 FROM appointments WHERE id = $1)",
            )
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            return Err(if exists {
                DomainError::ConcurrentUpdate
            } else {
                appointment_not_found(id)
            });
        }

        Ok(())
    }
}
