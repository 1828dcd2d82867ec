use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    errors::{Error, Result},
    middleware::CurrentUser,
    models::user::{RolePermissions, User, UserResponse},
    services::{identity, invitations, users},
    state::AppState,
    utils::{google::verify_id_token, jwt::encode_jwt, validated_form::ValidatedJson},
};

#[derive(Debug, Clone, serde::Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = password, message = "Passwords do not match"))]
    pub confirm_password: String,
    #[validate(length(min = 1))]
    pub token: String,
}

#[derive(Debug, Clone, serde::Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct GoogleSignInRequest {
    pub id_token: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserResponse,
    pub permissions: RolePermissions,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SignOutResponse {
    msg: String,
}

fn session_response(user: User, secret: &str) -> Result<SessionResponse> {
    let token = encode_jwt(&user.id.key().to_string(), secret)?;
    let permissions = user.role.permissions();
    Ok(SessionResponse {
        token,
        permissions,
        user: user.into(),
    })
}

/// Shared tail of every sign-in path: the application user record must
/// exist before any session token is handed out, and a successful session
/// establishment stamps the login.
async fn establish_session(state: &AppState, uid: &str) -> Result<SessionResponse> {
    let user = users::get_user(&state.sdb, uid)
        .await?
        .ok_or(Error::UnrecognizedUser)?;

    users::update_last_login(&state.sdb, uid).await?;

    session_response(user, &state.config.jwt_secret)
}

pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<SignUpRequest>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let invitation = invitations::validate_invitation(&state.sdb, &input.token)
        .await?
        .ok_or(Error::InvalidInvitation)?;

    if invitation.email != input.email.to_lowercase() {
        return Err(Error::InvitationEmailMismatch);
    }

    let uid = identity::create_credential(&state.sdb, &input.email, &input.password).await?;

    let created = users::create_user(
        &state.sdb,
        &uid,
        &input.email,
        invitation.role,
        Some(invitation.created_by.clone()),
    )
    .await;

    let user = match created {
        Ok(user) => user,
        Err(err) => {
            // Compensating delete; not transactional with the mark below.
            identity::delete_credential(&state.sdb, &uid).await?;
            return Err(err);
        }
    };

    invitations::mark_invitation_used(&state.sdb, &invitation.id).await?;

    tracing::info!("New account for {} via invitation", user.email);

    let session = session_response(user, &state.config.jwt_secret)?;
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<SignInRequest>,
) -> Result<Json<SessionResponse>> {
    let uid = identity::verify_credential(&state.sdb, &input.email, &input.password)
        .await?
        .ok_or(Error::InvalidLoginDetails)?;

    let session = establish_session(&state, &uid).await?;
    Ok(Json(session))
}

pub async fn sign_in_with_google(
    State(state): State<AppState>,
    Json(input): Json<GoogleSignInRequest>,
) -> Result<Json<SessionResponse>> {
    let client_id = state
        .config
        .google_client_id
        .as_deref()
        .ok_or(Error::GoogleSignInDisabled)?;

    let info = verify_id_token(&state.http, &input.id_token, client_id).await?;

    // Resolved by email against the user store, not the credential store.
    let user = users::get_user_by_email(&state.sdb, &info.email)
        .await?
        .ok_or(Error::EmailNotAuthorized)?;

    let uid = user.id.key().to_string();
    let session = establish_session(&state, &uid).await?;
    Ok(Json(session))
}

pub async fn sign_out(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<SignOutResponse> {
    // Sessions are stateless JWTs; the client discards the token.
    Json(SignOutResponse {
        msg: format!("signed out {}", user.email),
    })
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionView {
    pub user: UserResponse,
    pub permissions: RolePermissions,
}

pub async fn session(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<SessionView> {
    let permissions = user.role.permissions();
    Json(SessionView {
        permissions,
        user: user.into(),
    })
}
