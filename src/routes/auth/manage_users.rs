use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    errors::{Error, Result},
    middleware::CurrentUser,
    models::user::{UserResponse, UserRole},
    services::users,
    state::AppState,
};

pub async fn list_users(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
) -> Result<Json<Vec<UserResponse>>> {
    if !current.role.permissions().can_manage_users {
        return Err(Error::PermissionDenied);
    }

    let users = users::get_all_users(&state.sdb).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}

pub async fn update_user_role(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
    Path(uid): Path<String>,
    Json(input): Json<UpdateRoleRequest>,
) -> Result<Json<UserResponse>> {
    if !current.role.permissions().can_manage_users {
        return Err(Error::PermissionDenied);
    }

    if current.id.key().to_string() == uid {
        return Err(Error::CannotChangeOwnRole);
    }

    let user = users::update_user_role(&state.sdb, &uid, input.role)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(user.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
    Path(uid): Path<String>,
) -> Result<StatusCode> {
    if !current.role.permissions().can_manage_users {
        return Err(Error::PermissionDenied);
    }

    if current.id.key().to_string() == uid {
        return Err(Error::CannotDeleteSelf);
    }

    // The credential row stays behind; later sign-ins for this identity
    // fail closed as unrecognized.
    users::delete_user(&state.sdb, &uid)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(StatusCode::NO_CONTENT)
}
