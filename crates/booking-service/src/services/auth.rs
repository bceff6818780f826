//! Authentication service
//!
//! Handles account registration, the three login portals (admin, student,
//! teacher), teacher credential activation, and token refresh. One claims
//! model covers every principal kind; the role travels inside the JWT.

use booking_common::auth::{validate_password_strength, TokenPair};
use booking_common::AppError;
use booking_core::entities::Account;
use booking_core::Role;
use tracing::{info, instrument, warn};

use crate::dto::{
    AccountResponse, ActivateTeacherRequest, AuthResponse, LoginRequest, PrincipalResponse,
    RefreshTokenRequest, RegisterRequest, TeacherResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new admin account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register_admin(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        self.register_account(Role::Admin, request).await
    }

    /// Register a new student account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register_student(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        self.register_account(Role::Student, request).await
    }

    async fn register_account(
        &self,
        role: Role,
        request: RegisterRequest,
    ) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Check if email already exists
        if self.ctx.account_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        // Hash password
        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password)
            .map_err(ServiceError::from)?;

        // Create account
        let account_id = self.ctx.generate_id();
        let account = Account::new(
            account_id,
            request.name,
            request.email,
            password_hash,
            role,
        );

        // Save to database
        self.ctx.account_repo().create(&account).await?;

        info!(account_id = %account_id, role = %role, "Account registered");

        let token_pair = self.token_pair(account_id, role)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            PrincipalResponse::Account(AccountResponse::from(&account)),
        ))
    }

    /// Login to the admin portal
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login_admin(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        self.login_account(Role::Admin, request).await
    }

    /// Login to the student portal
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login_student(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        self.login_account(Role::Student, request).await
    }

    async fn login_account(
        &self,
        role: Role,
        request: LoginRequest,
    ) -> ServiceResult<AuthResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: account not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // An account only authenticates against its own portal; the mismatch
        // is reported the same as a bad password
        if account.role != role {
            warn!(account_id = %account.id, "Login failed: role mismatch");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &account.password_hash)
            .map_err(|e| {
                warn!(account_id = %account.id, "Login failed: invalid password");
                ServiceError::App(e)
            })?;

        info!(account_id = %account.id, role = %role, "Account logged in");

        let token_pair = self.token_pair(account.id, account.role)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            PrincipalResponse::Account(AccountResponse::from(&account)),
        ))
    }

    /// Login to the teacher portal
    ///
    /// Teachers authenticate against their profile row; a profile that has
    /// never been activated has no credentials and cannot log in.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login_teacher(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let teacher = self
            .ctx
            .teacher_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Teacher login failed: not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = teacher.password_hash.as_deref().filter(|_| teacher.can_login());
        let Some(password_hash) = password_hash else {
            warn!(teacher_id = %teacher.id, "Teacher login failed: not activated");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        };

        self.ctx
            .password_service()
            .verify_or_error(&request.password, password_hash)
            .map_err(|e| {
                warn!(teacher_id = %teacher.id, "Teacher login failed: invalid password");
                ServiceError::App(e)
            })?;

        info!(teacher_id = %teacher.id, "Teacher logged in");

        let token_pair = self.token_pair(teacher.id, Role::Teacher)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            PrincipalResponse::Teacher(TeacherResponse::from(&teacher)),
        ))
    }

    /// Activate a teacher profile by redeeming a one-time setup token
    #[instrument(skip(self, request))]
    pub async fn activate_teacher(
        &self,
        request: ActivateTeacherRequest,
    ) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let mut token = self
            .ctx
            .setup_token_repo()
            .find_by_code(&request.token)
            .await?
            .ok_or(ServiceError::Domain(
                booking_core::DomainError::SetupTokenNotFound,
            ))?;

        // Entity-level redemption check; rejects used and expired tokens
        token.redeem()?;

        let mut teacher = self
            .ctx
            .teacher_repo()
            .find_by_id(token.teacher_id)
            .await?
            .ok_or(ServiceError::Domain(
                booking_core::DomainError::TeacherNotFound(token.teacher_id),
            ))?;

        if teacher.has_account {
            return Err(booking_core::DomainError::AlreadyActivated.into());
        }

        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password)
            .map_err(ServiceError::from)?;

        // Consume the token first; the compare-and-set in the repository
        // makes two concurrent redemptions impossible
        self.ctx.setup_token_repo().mark_used(&request.token).await?;
        self.ctx
            .teacher_repo()
            .set_credentials(teacher.id, &password_hash)
            .await?;
        teacher.activate(password_hash);

        info!(teacher_id = %teacher.id, "Teacher account activated");

        let token_pair = self.token_pair(teacher.id, Role::Teacher)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            PrincipalResponse::Teacher(TeacherResponse::from(&teacher)),
        ))
    }

    /// Refresh the token pair using a valid refresh token
    ///
    /// The principal behind the token is re-checked against the database so
    /// deleted accounts and deactivated teachers cannot keep refreshing.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;
        let principal_id = claims.principal_id().map_err(ServiceError::from)?;

        let principal = match claims.role {
            Role::Teacher => {
                let teacher = self
                    .ctx
                    .teacher_repo()
                    .find_by_id(principal_id)
                    .await?
                    .filter(booking_core::Teacher::can_login)
                    .ok_or(ServiceError::App(AppError::InvalidToken))?;
                PrincipalResponse::Teacher(TeacherResponse::from(&teacher))
            }
            Role::Admin | Role::Student => {
                let account = self
                    .ctx
                    .account_repo()
                    .find_by_id(principal_id)
                    .await?
                    .filter(|a| a.role == claims.role)
                    .ok_or(ServiceError::App(AppError::InvalidToken))?;
                PrincipalResponse::Account(AccountResponse::from(&account))
            }
        };

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair_with_session(principal_id, claims.role, claims.session_id)
            .map_err(ServiceError::from)?;

        info!(principal_id = %principal_id, role = %claims.role, "Tokens refreshed");

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            principal,
        ))
    }

    fn token_pair(&self, id: booking_core::Snowflake, role: Role) -> ServiceResult<TokenPair> {
        self.ctx
            .jwt_service()
            .generate_token_pair(id, role)
            .map_err(ServiceError::from)
    }
}
