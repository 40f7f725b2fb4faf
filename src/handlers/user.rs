use axum::{
    extract::{Json, Path},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::{DbSession, user_store::UserStore},
    error::Result,
    models::user::{UserDeleted, UserPayload, UserUpdated},
};

/// Get all users handler
pub async fn list_users(mut session: DbSession) -> Result<impl IntoResponse> {
    let users = UserStore::new(&mut session).list_users().await?;
    Ok((StatusCode::OK, Json(users)))
}

/// Add user handler. Responds with an empty body.
pub async fn create_user(
    mut session: DbSession,
    Json(payload): Json<UserPayload>,
) -> Result<StatusCode> {
    let user = UserStore::new(&mut session).create_user(&payload).await?;
    tracing::info!(id = user.id, "User created");
    Ok(StatusCode::OK)
}

/// Replace user handler
pub async fn update_user(
    Path(user_id): Path<i64>,
    mut session: DbSession,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse> {
    let user = UserStore::new(&mut session)
        .update_user(user_id, &payload)
        .await?;
    tracing::info!(id = user.id, "User updated");
    Ok((StatusCode::OK, Json(UserUpdated::new(user))))
}

/// Delete user handler
pub async fn delete_user(
    Path(user_id): Path<i64>,
    mut session: DbSession,
) -> Result<impl IntoResponse> {
    let user = UserStore::new(&mut session).delete_user(user_id).await?;
    tracing::info!(id = user.id, "User deleted");
    Ok((StatusCode::OK, Json(UserDeleted::new(user))))
}
