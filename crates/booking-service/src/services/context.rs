//! Service context - dependency container for services
//!
//! Holds all repositories and shared services the business logic needs.

use std::sync::Arc;

use booking_common::auth::{JwtService, PasswordService};
use booking_core::traits::{
    AccountRepository, AppointmentRepository, SetupTokenRepository, TeacherRepository,
};
use booking_core::SnowflakeGenerator;
use booking_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Password hashing service
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    account_repo: Arc<dyn AccountRepository>,
    teacher_repo: Arc<dyn TeacherRepository>,
    appointment_repo: Arc<dyn AppointmentRepository>,
    setup_token_repo: Arc<dyn SetupTokenRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
    snowflake_generator: Arc<SnowflakeGenerator>,

    // How long a freshly issued setup token stays redeemable, in seconds
    setup_token_ttl: i64,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        account_repo: Arc<dyn AccountRepository>,
        teacher_repo: Arc<dyn TeacherRepository>,
        appointment_repo: Arc<dyn AppointmentRepository>,
        setup_token_repo: Arc<dyn SetupTokenRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        setup_token_ttl: i64,
    ) -> Self {
        Self {
            pool,
            account_repo,
            teacher_repo,
            appointment_repo,
            setup_token_repo,
            jwt_service,
            password_service: PasswordService::new(),
            snowflake_generator,
            setup_token_ttl,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the account repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the teacher repository
    pub fn teacher_repo(&self) -> &dyn TeacherRepository {
        self.teacher_repo.as_ref()
    }

    /// Get the appointment repository
    pub fn appointment_repo(&self) -> &dyn AppointmentRepository {
        self.appointment_repo.as_ref()
    }

    /// Get the setup token repository
    pub fn setup_token_repo(&self) -> &dyn SetupTokenRepository {
        self.setup_token_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password hashing service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> booking_core::Snowflake {
        self.snowflake_generator.generate()
    }

    /// Setup token time-to-live in seconds
    pub fn setup_token_ttl(&self) -> i64 {
        self.setup_token_ttl
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("setup_token_ttl", &self.setup_token_ttl)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    account_repo: Option<Arc<dyn AccountRepository>>,
    teacher_repo: Option<Arc<dyn TeacherRepository>>,
    appointment_repo: Option<Arc<dyn AppointmentRepository>>,
    setup_token_repo: Option<Arc<dyn SetupTokenRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    setup_token_ttl: Option<i64>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            account_repo: None,
            teacher_repo: None,
            appointment_repo: None,
            setup_token_repo: None,
            jwt_service: None,
            snowflake_generator: None,
            setup_token_ttl: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn teacher_repo(mut self, repo: Arc<dyn TeacherRepository>) -> Self {
        self.teacher_repo = Some(repo);
        self
    }

    pub fn appointment_repo(mut self, repo: Arc<dyn AppointmentRepository>) -> Self {
        self.appointment_repo = Some(repo);
        self
    }

    pub fn setup_token_repo(mut self, repo: Arc<dyn SetupTokenRepository>) -> Self {
        self.setup_token_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn setup_token_ttl(mut self, ttl_seconds: i64) -> Self {
        self.setup_token_ttl = Some(ttl_seconds);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.account_repo
                .ok_or_else(|| ServiceError::validation("account_repo is required"))?,
            self.teacher_repo
                .ok_or_else(|| ServiceError::validation("teacher_repo is required"))?,
            self.appointment_repo
                .ok_or_else(|| ServiceError::validation("appointment_repo is required"))?,
            self.setup_token_repo
                .ok_or_else(|| ServiceError::validation("setup_token_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.setup_token_ttl
                .ok_or_else(|| ServiceError::validation("setup_token_ttl is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
