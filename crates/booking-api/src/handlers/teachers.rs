//! Teacher handlers
//!
//! Endpoints for the teacher directory, admin-managed profiles,
//! and setup-token issuance.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use booking_service::{
    CreateTeacherRequest, SetupTokenResponse, TeacherListQuery, TeacherResponse, TeacherService,
    UpdateTeacherRequest,
};

use crate::extractors::{AuthUser, TeacherIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List active teachers
///
/// GET /teachers
pub async fn list_teachers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<TeacherListQuery>,
) -> ApiResult<Json<Vec<TeacherResponse>>> {
    let service = TeacherService::new(state.service_context());
    let teachers = service.list(query).await?;
    Ok(Json(teachers))
}

/// Create a teacher profile (admin only)
///
/// POST /teachers
pub async fn create_teacher(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTeacherRequest>,
) -> ApiResult<Created<Json<TeacherResponse>>> {
    let service = TeacherService::new(state.service_context());
    let response = service.create(auth.principal(), request).await?;
    Ok(Created(Json(response)))
}

/// Get a teacher profile
///
/// GET /teachers/{teacher_id}
pub async fn get_teacher(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<TeacherIdPath>,
) -> ApiResult<Json<TeacherResponse>> {
    let teacher_id = path.teacher_id()?;

    let service = TeacherService::new(state.service_context());
    let response = service.get(teacher_id).await?;
    Ok(Json(response))
}

/// Update a teacher profile (admin or the teacher themself)
///
/// PUT /teachers/{teacher_id}
pub async fn update_teacher(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<TeacherIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateTeacherRequest>,
) -> ApiResult<Json<TeacherResponse>> {
    let teacher_id = path.teacher_id()?;

    let service = TeacherService::new(state.service_context());
    let response = service.update(auth.principal(), teacher_id, request).await?;
    Ok(Json(response))
}

/// Deactivate a teacher profile (admin only)
///
/// DELETE /teachers/{teacher_id}
pub async fn delete_teacher(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<TeacherIdPath>,
) -> ApiResult<NoContent> {
    let teacher_id = path.teacher_id()?;

    let service = TeacherService::new(state.service_context());
    service.delete(auth.principal(), teacher_id).await?;
    Ok(NoContent)
}

/// Issue a one-time setup token for a teacher (admin only)
///
/// POST /teachers/{teacher_id}/setup-token
pub async fn issue_setup_token(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<TeacherIdPath>,
) -> ApiResult<Created<Json<SetupTokenResponse>>> {
    let teacher_id = path.teacher_id()?;

    let service = TeacherService::new(state.service_context());
    let response = service.issue_setup_token(auth.principal(), teacher_id).await?;
    Ok(Created(Json(response)))
}
