//! Handlers for the `/teachers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use schoolhub_core::error::CoreError;
use schoolhub_core::types::DbId;
use schoolhub_db::models::teacher::{CreateTeacher, Teacher, UpdateTeacher};
use schoolhub_db::repositories::TeacherRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/teachers
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Teacher>>> {
    let teachers = TeacherRepo::list_all(&state.pool).await?;
    Ok(Json(teachers))
}

/// POST /api/v1/teachers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTeacher>,
) -> AppResult<(StatusCode, Json<Teacher>)> {
    let teacher = TeacherRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// GET /api/v1/teachers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Teacher>> {
    let teacher = TeacherRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }))?;
    Ok(Json(teacher))
}

/// PUT /api/v1/teachers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeacher>,
) -> AppResult<Json<Teacher>> {
    let teacher = TeacherRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }))?;
    Ok(Json(teacher))
}

/// DELETE /api/v1/teachers/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TeacherRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }))
    }
}
