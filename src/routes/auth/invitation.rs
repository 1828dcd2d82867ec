use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::{
    errors::{Error, Result},
    middleware::CurrentUser,
    models::invitation::InvitationResponse,
    models::user::UserRole,
    services::invitations,
    state::AppState,
    utils::validated_form::ValidatedJson,
};

#[derive(Debug, Clone, serde::Deserialize, Validate)]
pub struct CreateInvitationRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CreateInvitationResponse {
    pub token: String,
    pub email: String,
    pub role: UserRole,
    pub expires_at: String,
    /// Ready-to-send link to the signup page, valid for 7 days.
    pub signup_url: String,
}

pub async fn create_invitation(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
    ValidatedJson(input): ValidatedJson<CreateInvitationRequest>,
) -> Result<(StatusCode, Json<CreateInvitationResponse>)> {
    if !current.role.permissions().can_invite_users {
        return Err(Error::PermissionDenied);
    }

    let invitation =
        invitations::create_invitation(&state.sdb, &input.email, input.role, current.id.clone())
            .await?;

    let signup_url = format!(
        "{}/signup?token={}&email={}",
        state.config.site_url.trim_end_matches('/'),
        invitation.token,
        invitation.email,
    );

    info!("Invitation created for {}", invitation.email);

    Ok((
        StatusCode::CREATED,
        Json(CreateInvitationResponse {
            token: invitation.token,
            email: invitation.email,
            role: invitation.role,
            expires_at: invitation.expires_at,
            signup_url,
        }),
    ))
}

pub async fn list_invitations(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
) -> Result<Json<Vec<InvitationResponse>>> {
    if !current.role.permissions().can_invite_users {
        return Err(Error::PermissionDenied);
    }

    let invitations = invitations::get_all_invitations(&state.sdb).await?;
    Ok(Json(
        invitations
            .into_iter()
            .map(InvitationResponse::from)
            .collect(),
    ))
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ValidateInvitationQuery {
    pub token: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidateInvitationResponse {
    pub email: String,
    pub role: UserRole,
    pub expires_at: String,
}

/// Public, side-effect-free check the signup page runs on load to pre-fill
/// email and show the granted role.
pub async fn validate_invitation(
    State(state): State<AppState>,
    Query(query): Query<ValidateInvitationQuery>,
) -> Result<Json<ValidateInvitationResponse>> {
    let invitation = invitations::validate_invitation(&state.sdb, &query.token)
        .await?
        .ok_or(Error::InvalidInvitation)?;

    Ok(Json(ValidateInvitationResponse {
        email: invitation.email,
        role: invitation.role,
        expires_at: invitation.expires_at,
    }))
}
