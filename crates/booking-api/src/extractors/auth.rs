//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use booking_core::{Role, Snowflake};
use booking_service::Principal;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated principal extracted from a JWT access token
///
/// For admins and students `id` is an account ID; for teachers it is the
/// teacher profile ID. The role comes from the token claims.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Snowflake,
    pub role: Role,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(id: Snowflake, role: Role) -> Self {
        Self { id, role }
    }

    /// Convert into the service-layer principal
    pub fn principal(self) -> Principal {
        Principal::new(self.id, self.role)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract principal ID from claims
        let id = claims.principal_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid principal ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthUser::new(id, claims.role))
    }
}
