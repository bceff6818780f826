//! PostgreSQL implementation of TeacherRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booking_core::entities::Teacher;
use booking_core::error::DomainError;
use booking_core::traits::{RepoResult, TeacherFilter, TeacherRepository};
use booking_core::value_objects::Snowflake;

use crate::models::TeacherModel;

use super::error::{map_db_error, map_unique_violation, teacher_not_found};

const TEACHER_COLUMNS: &str = r"
    id, name, email, department, subject, experience_years, qualification,
    bio, availability, password_hash, has_account, is_active, created_at, updated_at
";

/// PostgreSQL implementation of TeacherRepository
#[derive(Clone)]
pub struct PgTeacherRepository {
    pool: PgPool,
}

impl PgTeacherRepository {
    /// Create a new PgTeacherRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherRepository for PgTeacherRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Teacher>> {
        let result = sqlx::query_as::<_, TeacherModel>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1 AND is_active"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Teacher::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Teacher>> {
        let result = sqlx::query_as::<_, TeacherModel>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE email = $1 AND is_active"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Teacher::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM teachers WHERE email = $1 AND is_active)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, filter: &TeacherFilter) -> RepoResult<Vec<Teacher>> {
        // NULL binds disable the corresponding predicate
        let rows = sqlx::query_as::<_, TeacherModel>(&format!(
            r"
            SELECT {TEACHER_COLUMNS}
            FROM teachers
            WHERE is_active
              AND ($1::TEXT IS NULL OR department = $1)
              AND ($2::TEXT IS NULL OR subject = $2)
              AND ($3::TEXT IS NULL
                   OR name ILIKE '%' || $3 || '%'
                   OR department ILIKE '%' || $3 || '%'
                   OR subject ILIKE '%' || $3 || '%')
            ORDER BY name
            "
        ))
        .bind(filter.department.as_deref())
        .bind(filter.subject.as_deref())
        .bind(filter.search.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    #[instrument(skip(self, teacher), fields(id = %teacher.id))]
    async fn create(&self, teacher: &Teacher) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO teachers (id, name, email, department, subject, experience_years,
                                  qualification, bio, availability, password_hash,
                                  has_account, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(teacher.id.into_inner())
        .bind(&teacher.name)
        .bind(&teacher.email)
        .bind(&teacher.department)
        .bind(&teacher.subject)
        .bind(teacher.experience_years)
        .bind(&teacher.qualification)
        .bind(&teacher.bio)
        .bind(&teacher.availability)
        .bind(&teacher.password_hash)
        .bind(teacher.has_account)
        .bind(teacher.is_active)
        .bind(teacher.created_at)
        .bind(teacher.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, teacher), fields(id = %teacher.id))]
    async fn update(&self, teacher: &Teacher) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE teachers
            SET name = $2, email = $3, department = $4, subject = $5,
                experience_years = $6, qualification = $7, bio = $8,
                availability = $9, updated_at = NOW()
            WHERE id = $1 AND is_active
            ",
        )
        .bind(teacher.id.into_inner())
        .bind(&teacher.name)
        .bind(&teacher.email)
        .bind(&teacher.department)
        .bind(&teacher.subject)
        .bind(teacher.experience_years)
        .bind(&teacher.qualification)
        .bind(&teacher.bio)
        .bind(&teacher.availability)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(teacher_not_found(teacher.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE teachers
            SET is_active = FALSE, updated_at = NOW()
            WHERE id = $1 AND is_active
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(teacher_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn set_credentials(&self, id: Snowflake, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE teachers
            SET password_hash = $2, has_account = TRUE, updated_at = NOW()
            WHERE id = $1 AND is_active
            ",
        )
        .bind(id.into_inner())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(teacher_not_found(id));
        }

        Ok(())
    }
}
