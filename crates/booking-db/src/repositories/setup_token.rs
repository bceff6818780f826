//! PostgreSQL implementation of SetupTokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booking_core::entities::SetupToken;
use booking_core::error::DomainError;
use booking_core::traits::{RepoResult, SetupTokenRepository};

use crate::models::SetupTokenModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SetupTokenRepository
#[derive(Clone)]
pub struct PgSetupTokenRepository {
    pool: PgPool,
}

impl PgSetupTokenRepository {
    /// Create a new PgSetupTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SetupTokenRepository for PgSetupTokenRepository {
    #[instrument(skip(self, code))]
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<SetupToken>> {
        let result = sqlx::query_as::<_, SetupTokenModel>(
            r"
            SELECT code, teacher_id, created_at, expires_at, used_at
            FROM setup_tokens
            WHERE code = $1
            ",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SetupToken::from))
    }

    #[instrument(skip(self, token), fields(teacher_id = %token.teacher_id))]
    async fn create(&self, token: &SetupToken) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO setup_tokens (code, teacher_id, created_at, expires_at, used_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&token.code)
        .bind(token.teacher_id.into_inner())
        .bind(token.created_at)
        .bind(token.expires_at)
        .bind(token.used_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, code))]
    async fn mark_used(&self, code: &str) -> RepoResult<()> {
        // Compare-and-set so two concurrent redemptions cannot both win
        let result = sqlx::query(
            r"
            UPDATE setup_tokens
            SET used_at = NOW()
            WHERE code = $1 AND used_at IS NULL
            ",
        )
        .bind(code)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            let exists = sqlx::query_scalar::<_, bool>(
                r"SELECT EXISTS(SELECT 1 FROM setup_tokens WHERE code = $1)",
            )
            .bind(code)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            return Err(if exists {
                DomainError::SetupTokenUsed
            } else {
                DomainError::SetupTokenNotFound
            });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_expired(&self) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM setup_tokens
            WHERE expires_at < NOW() AND used_at IS NULL
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
