use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::error;
use types::prelude::*;

use crate::error::AppError;
use crate::models::{CreateUserRequest, UserResponse};
use crate::state::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::BadRequest("Invalid request body".into()))?;

    let new_user = NewUser::new(&payload.name)?;

    let user = state
        .users
        .create_user(&new_user)
        .await
        .inspect_err(|e| error!(error = %e, name = new_user.name(), "Error creating user via User Service"))
        .map_err(|e| AppError::upstream("Failed to create user", e))?;

    Ok(Json(UserResponse { user }))
}
