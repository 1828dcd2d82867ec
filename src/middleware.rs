use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::errors::{Error, Result};
use crate::models::user::User;
use crate::services::users;
use crate::state::AppState;
use crate::utils::jwt::decode_jwt;

/// Authenticated user record attached to every gated request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

pub async fn auth_session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let user = authenticate(&state, request.headers()).await?;
    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<User> {
    let header_value = headers
        .get(AUTHORIZATION)
        .ok_or(Error::MissingToken)?
        .to_str()
        .map_err(|_| Error::InvalidToken)?;

    let mut parts = header_value.trim().splitn(2, ' ');

    let scheme = parts.next().ok_or(Error::MissingToken)?;
    let token = parts.next().ok_or(Error::MissingToken)?;

    if scheme != "Bearer" {
        tracing::warn!("Invalid auth scheme: {scheme}");
        return Err(Error::InvalidScheme);
    }

    let claims = decode_jwt(token, &state.config.jwt_secret)?.claims;

    // A valid token whose user record is gone counts as signed out.
    users::get_user(&state.sdb, &claims.id)
        .await?
        .ok_or(Error::UnrecognizedUser)
}
