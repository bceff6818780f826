//! Teacher profile service
//!
//! Handles the teacher directory: listing, admin-managed profiles, and
//! setup-token issuance for credential activation.

use booking_core::entities::{generate_setup_code, SetupToken, Teacher};
use booking_core::traits::TeacherFilter;
use booking_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateTeacherRequest, SetupTokenResponse, TeacherListQuery, TeacherResponse,
    UpdateTeacherRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::principal::Principal;

/// Teacher profile service
pub struct TeacherService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeacherService<'a> {
    /// Create a new TeacherService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List active teachers, optionally filtered
    #[instrument(skip(self, query))]
    pub async fn list(&self, query: TeacherListQuery) -> ServiceResult<Vec<TeacherResponse>> {
        let filter = TeacherFilter {
            department: query.department,
            subject: query.subject,
            search: query.q,
        };

        let teachers = self.ctx.teacher_repo().list(&filter).await?;
        Ok(teachers.iter().map(TeacherResponse::from).collect())
    }

    /// Get a teacher profile by ID
    #[instrument(skip(self))]
    pub async fn get(&self, teacher_id: Snowflake) -> ServiceResult<TeacherResponse> {
        let teacher = self.find_teacher(teacher_id).await?;
        Ok(TeacherResponse::from(&teacher))
    }

    /// Create a teacher profile (admin only)
    ///
    /// The profile starts without credentials; the teacher can only log in
    /// after redeeming a setup token.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create(
        &self,
        principal: Principal,
        request: CreateTeacherRequest,
    ) -> ServiceResult<TeacherResponse> {
        principal.require_admin()?;

        if self.ctx.teacher_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let teacher_id = self.ctx.generate_id();
        let teacher = Teacher::new(
            teacher_id,
            request.name,
            request.email,
            request.department,
            request.subject,
            request.experience_years,
            request.qualification,
        )
        .with_bio(request.bio)
        .with_availability(request.availability);

        self.ctx.teacher_repo().create(&teacher).await?;

        info!(teacher_id = %teacher_id, admin_id = %principal.id, "Teacher profile created");

        Ok(TeacherResponse::from(&teacher))
    }

    /// Update a teacher profile (admin or the teacher themself)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        principal: Principal,
        teacher_id: Snowflake,
        request: UpdateTeacherRequest,
    ) -> ServiceResult<TeacherResponse> {
        if !principal.role.is_admin() && principal.id != teacher_id {
            return Err(DomainError::NotProfileOwner.into());
        }

        let mut teacher = self.find_teacher(teacher_id).await?;

        if let Some(name) = request.name {
            teacher.name = name;
        }
        if let Some(email) = request.email {
            teacher.email = email;
        }
        if let Some(department) = request.department {
            teacher.department = department;
        }
        if let Some(subject) = request.subject {
            teacher.subject = subject;
        }
        if let Some(experience_years) = request.experience_years {
            teacher.experience_years = experience_years;
        }
        if let Some(qualification) = request.qualification {
            teacher.qualification = qualification;
        }
        if let Some(bio) = request.bio {
            teacher.bio = Some(bio);
        }
        if let Some(availability) = request.availability {
            teacher.availability = availability;
        }

        self.ctx.teacher_repo().update(&teacher).await?;

        info!(teacher_id = %teacher_id, updated_by = %principal.id, "Teacher profile updated");

        Ok(TeacherResponse::from(&teacher))
    }

    /// Soft-delete a teacher profile (admin only)
    #[instrument(skip(self))]
    pub async fn delete(&self, principal: Principal, teacher_id: Snowflake) -> ServiceResult<()> {
        principal.require_admin()?;

        self.ctx.teacher_repo().delete(teacher_id).await?;

        info!(teacher_id = %teacher_id, admin_id = %principal.id, "Teacher profile deactivated");

        Ok(())
    }

    /// Issue a one-time setup token for a not-yet-activated teacher (admin only)
    #[instrument(skip(self))]
    pub async fn issue_setup_token(
        &self,
        principal: Principal,
        teacher_id: Snowflake,
    ) -> ServiceResult<SetupTokenResponse> {
        principal.require_admin()?;

        let teacher = self.find_teacher(teacher_id).await?;
        if teacher.has_account {
            return Err(DomainError::AlreadyActivated.into());
        }

        // Sweep expired tokens so stale codes never accumulate
        let swept = self.ctx.setup_token_repo().delete_expired().await?;
        if swept > 0 {
            info!(count = swept, "Expired setup tokens removed");
        }

        let token = SetupToken::new(
            generate_setup_code(),
            teacher.id,
            self.ctx.setup_token_ttl(),
        );
        self.ctx.setup_token_repo().create(&token).await?;

        info!(teacher_id = %teacher_id, admin_id = %principal.id, "Setup token issued");

        Ok(SetupTokenResponse::from(&token))
    }

    async fn find_teacher(&self, teacher_id: Snowflake) -> ServiceResult<Teacher> {
        self.ctx
            .teacher_repo()
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::TeacherNotFound(teacher_id)))
    }
}
