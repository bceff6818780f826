//! Appointment service
//!
//! Owns the appointment lifecycle: student requests, teacher direct bookings,
//! role-scoped listing, and the guarded status transitions. Every transition
//! goes through the domain state machine, then is applied with a
//! compare-and-set in the repository so concurrent writers cannot both win.

use booking_core::entities::{Appointment, CreatedBy, StudentInfo};
use booking_core::traits::AppointmentFilter;
use booking_core::{AppointmentStatus, DomainError, Role, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    AppointmentListQuery, AppointmentResponse, BookAppointmentRequest, RequestAppointmentRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::principal::Principal;

/// Appointment service
pub struct AppointmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AppointmentService<'a> {
    /// Create a new AppointmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Student requests an appointment; it starts `pending`
    #[instrument(skip(self, request))]
    pub async fn request(
        &self,
        principal: Principal,
        request: RequestAppointmentRequest,
    ) -> ServiceResult<AppointmentResponse> {
        principal.require_student()?;

        let teacher_id = Snowflake::parse(&request.teacher_id)
            .map_err(|_| ServiceError::validation("Invalid teacher_id"))?;

        let teacher = self
            .ctx
            .teacher_repo()
            .find_by_id(teacher_id)
            .await?
            .ok_or(DomainError::TeacherNotFound(teacher_id))?;

        if !teacher.offers_slot(&request.time) {
            return Err(DomainError::SlotNotOffered {
                slot: request.time,
            }
            .into());
        }

        let appointment = Appointment::new(
            self.ctx.generate_id(),
            teacher.id,
            StudentInfo {
                name: request.student_name,
                email: request.student_email,
                phone: request.student_phone,
            },
            request.date,
            request.time,
            CreatedBy::Student,
        )
        .with_student_account(principal.id);

        self.ctx.appointment_repo().create(&appointment).await?;

        info!(
            appointment_id = %appointment.id,
            teacher_id = %teacher.id,
            student_id = %principal.id,
            "Appointment requested"
        );

        Ok(AppointmentResponse::from(&appointment))
    }

    /// Teacher books an appointment directly on their own calendar;
    /// it starts `confirmed`
    #[instrument(skip(self, request))]
    pub async fn book(
        &self,
        principal: Principal,
        request: BookAppointmentRequest,
    ) -> ServiceResult<AppointmentResponse> {
        principal.require_teacher()?;

        // The booking teacher must still have an active profile
        let teacher = self
            .ctx
            .teacher_repo()
            .find_by_id(principal.id)
            .await?
            .ok_or(DomainError::TeacherNotFound(principal.id))?;

        if !teacher.offers_slot(&request.time) {
            return Err(DomainError::SlotNotOffered {
                slot: request.time,
            }
            .into());
        }

        let appointment = Appointment::new(
            self.ctx.generate_id(),
            teacher.id,
            StudentInfo {
                name: request.student_name,
                email: request.student_email,
                phone: request.student_phone,
            },
            request.date,
            request.time,
            CreatedBy::Teacher,
        );

        self.ctx.appointment_repo().create(&appointment).await?;

        info!(
            appointment_id = %appointment.id,
            teacher_id = %teacher.id,
            "Appointment booked directly"
        );

        Ok(AppointmentResponse::from(&appointment))
    }

    /// List appointments scoped by role: admins see everything, teachers
    /// their own calendar, students their own requests
    #[instrument(skip(self, query))]
    pub async fn list(
        &self,
        principal: Principal,
        query: AppointmentListQuery,
    ) -> ServiceResult<Vec<AppointmentResponse>> {
        let status = query
            .status
            .as_deref()
            .map(AppointmentStatus::parse)
            .transpose()?;

        let filter = match principal.role {
            Role::Admin => AppointmentFilter {
                status,
                date: query.date,
                ..Default::default()
            },
            Role::Teacher => AppointmentFilter {
                teacher_id: Some(principal.id),
                status,
                date: query.date,
                ..Default::default()
            },
            Role::Student => AppointmentFilter {
                student_account_id: Some(principal.id),
                status,
                date: query.date,
                ..Default::default()
            },
        };

        let appointments = self.ctx.appointment_repo().list(&filter).await?;
        Ok(appointments.iter().map(AppointmentResponse::from).collect())
    }

    /// Get an appointment; only participants and admins may see it
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        principal: Principal,
        appointment_id: Snowflake,
    ) -> ServiceResult<AppointmentResponse> {
        let appointment = self.find_appointment(appointment_id).await?;
        self.ensure_participant(principal, &appointment)?;
        Ok(AppointmentResponse::from(&appointment))
    }

    /// Accept a pending appointment (owning teacher only)
    #[instrument(skip(self, message))]
    pub async fn accept(
        &self,
        principal: Principal,
        appointment_id: Snowflake,
        message: Option<String>,
    ) -> ServiceResult<AppointmentResponse> {
        let appointment = self.find_appointment(appointment_id).await?;
        self.ensure_owning_teacher(principal, &appointment)?;
        self.apply_transition(&appointment, AppointmentStatus::Confirmed, message)
            .await
    }

    /// Reject a pending appointment (owning teacher only)
    #[instrument(skip(self, message))]
    pub async fn reject(
        &self,
        principal: Principal,
        appointment_id: Snowflake,
        message: Option<String>,
    ) -> ServiceResult<AppointmentResponse> {
        let appointment = self.find_appointment(appointment_id).await?;
        self.ensure_owning_teacher(principal, &appointment)?;
        self.apply_transition(&appointment, AppointmentStatus::Rejected, message)
            .await
    }

    /// Cancel a pending or confirmed appointment. Allowed for the owning
    /// teacher, the booking student, or an admin.
    #[instrument(skip(self, message))]
    pub async fn cancel(
        &self,
        principal: Principal,
        appointment_id: Snowflake,
        message: Option<String>,
    ) -> ServiceResult<AppointmentResponse> {
        let appointment = self.find_appointment(appointment_id).await?;
        self.ensure_participant(principal, &appointment)?;
        self.apply_transition(&appointment, AppointmentStatus::Cancelled, message)
            .await
    }

    /// Complete a confirmed appointment (owning teacher only)
    #[instrument(skip(self, message))]
    pub async fn complete(
        &self,
        principal: Principal,
        appointment_id: Snowflake,
        message: Option<String>,
    ) -> ServiceResult<AppointmentResponse> {
        let appointment = self.find_appointment(appointment_id).await?;
        self.ensure_owning_teacher(principal, &appointment)?;
        self.apply_transition(&appointment, AppointmentStatus::Completed, message)
            .await
    }

    async fn find_appointment(&self, appointment_id: Snowflake) -> ServiceResult<Appointment> {
        self.ctx
            .appointment_repo()
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::AppointmentNotFound(appointment_id)))
    }

    /// Admins, the owning teacher, and the booking student are participants
    fn ensure_participant(
        &self,
        principal: Principal,
        appointment: &Appointment,
    ) -> ServiceResult<()> {
        let allowed = match principal.role {
            Role::Admin => true,
            Role::Teacher => appointment.teacher_id == principal.id,
            Role::Student => appointment.is_booked_by(principal.id),
        };
        if allowed {
            Ok(())
        } else {
            Err(DomainError::NotParticipant.into())
        }
    }

    fn ensure_owning_teacher(
        &self,
        principal: Principal,
        appointment: &Appointment,
    ) -> ServiceResult<()> {
        principal.require_teacher()?;
        if appointment.teacher_id == principal.id {
            Ok(())
        } else {
            Err(DomainError::NotParticipant.into())
        }
    }

    /// Validate the move against the lifecycle table, then apply it with a
    /// compare-and-set keyed on the status we just read. Losing the race
    /// surfaces as `CONCURRENT_UPDATE` rather than silently overwriting.
    async fn apply_transition(
        &self,
        appointment: &Appointment,
        next: AppointmentStatus,
        message: Option<String>,
    ) -> ServiceResult<AppointmentResponse> {
        appointment.status.transition_to(next)?;

        self.ctx
            .appointment_repo()
            .transition(appointment.id, appointment.status, next, message.as_deref())
            .await?;

        info!(
            appointment_id = %appointment.id,
            from = %appointment.status,
            to = %next,
            "Appointment transitioned"
        );

        let updated = self.find_appointment(appointment.id).await?;
        Ok(AppointmentResponse::from(&updated))
    }
}
