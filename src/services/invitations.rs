use surrealdb::{RecordId, Surreal, engine::any::Any};

use crate::consts::auth_const::INVITATION_TABLE;
use crate::errors::{Error, Result};
use crate::models::invitation::{CreateInvitation, Invitation};
use crate::models::user::UserRole;
use crate::utils::time::{is_past, time_now, time_now_plus_seven_days};
use crate::utils::token::generate_invitation_token;

pub async fn create_invitation(
    sdb: &Surreal<Any>,
    email: &str,
    role: UserRole,
    created_by: RecordId,
) -> Result<Invitation> {
    let invitation_data = CreateInvitation {
        email: email.to_lowercase(),
        role,
        token: generate_invitation_token(),
        created_by,
        created_at: time_now(),
        expires_at: time_now_plus_seven_days(),
        used: false,
    };

    let invitation: Option<Invitation> = sdb
        .create(INVITATION_TABLE)
        .content(invitation_data)
        .await?;

    invitation.ok_or(Error::InternalServerError)
}

/// Look up an unused invitation by token. Side-effect-free: expired or
/// missing invitations yield `None`, nothing is mutated.
pub async fn validate_invitation(sdb: &Surreal<Any>, token: &str) -> Result<Option<Invitation>> {
    let invitation = sdb
        .query("SELECT * FROM type::table($table) WHERE token = $tok AND used = false;")
        .bind(("table", INVITATION_TABLE))
        .bind(("tok", token.to_string()))
        .await?
        .take::<Vec<Invitation>>(0)?
        .into_iter()
        .next();

    let Some(invitation) = invitation else {
        return Ok(None);
    };

    if is_past(&invitation.expires_at) {
        return Ok(None);
    }

    Ok(Some(invitation))
}

pub async fn mark_invitation_used(sdb: &Surreal<Any>, id: &RecordId) -> Result<()> {
    let _: Option<Invitation> = sdb
        .update(id.clone())
        .merge(serde_json::json!({ "used": true, "used_at": time_now() }))
        .await?;
    Ok(())
}

pub async fn get_all_invitations(sdb: &Surreal<Any>) -> Result<Vec<Invitation>> {
    Ok(sdb.select(INVITATION_TABLE).await?)
}
