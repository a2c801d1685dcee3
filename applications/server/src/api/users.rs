/// User CRUD API routes
use crate::envelope::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bson::oid::ObjectId;
use roster_store::{User, UserInput, UserRecord};
use serde::Serialize;

/// Acknowledgment returned by a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: String,
}

/// POST /user - Create a new user
///
/// Validation runs before any store interaction; an invalid body never
/// reaches the store.
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> Result<ApiResponse<CreatedUser>, ApiError> {
    let Json(input) = body.map_err(|rej| ApiError::BadRequest(rej.body_text()))?;
    input.validate().map_err(ApiError::Validation)?;

    let record = UserRecord::new(input);
    let id = state.store.insert(record).await?;

    Ok(ApiResponse::success(
        StatusCode::CREATED,
        CreatedUser { id: id.to_hex() },
    ))
}

/// GET /user - List all users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<User>>, ApiError> {
    let users = state
        .store
        .list()
        .await?
        .into_iter()
        .map(User::from)
        .collect();

    Ok(ApiResponse::success(StatusCode::OK, users))
}

/// GET /user/:id - Get a user by id
pub async fn get_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<ApiResponse<User>, ApiError> {
    let id = parse_object_id(&id)?;

    let record = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    Ok(ApiResponse::success(StatusCode::OK, User::from(record)))
}

/// PUT /user/:id - Update a user by id
///
/// A wholesale overwrite of the mutable fields; a zero-match update surfaces
/// as not-found rather than an empty success.
pub async fn update_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> Result<ApiResponse<User>, ApiError> {
    let id = parse_object_id(&id)?;
    let Json(input) = body.map_err(|rej| ApiError::BadRequest(rej.body_text()))?;
    input.validate().map_err(ApiError::Validation)?;

    let record = state
        .store
        .update(id, input)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    Ok(ApiResponse::success(StatusCode::OK, User::from(record)))
}

/// DELETE /user/:id - Delete a user by id
pub async fn delete_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<ApiResponse<&'static str>, ApiError> {
    let id = parse_object_id(&id)?;

    if state.store.delete(id).await? {
        Ok(ApiResponse::success(
            StatusCode::OK,
            "user deleted successfully",
        ))
    } else {
        Err(ApiError::NotFound("user not found".to_string()))
    }
}

/// An id that does not parse fails fast instead of being queried as a
/// guaranteed miss.
fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}
