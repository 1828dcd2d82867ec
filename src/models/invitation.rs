use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::models::user::UserRole;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Invitation {
    pub id: RecordId,
    pub email: String, // ! lowercase & (len = 255)
    pub role: UserRole,

    pub token: String, // ! unique, opaque, compared by equality
    pub created_by: RecordId,

    pub created_at: String,
    pub expires_at: String, // ! (now + 7 days)
    pub used: bool,
    pub used_at: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateInvitation {
    pub email: String,
    pub role: UserRole,

    pub token: String,
    pub created_by: RecordId,

    pub created_at: String,
    pub expires_at: String,
    pub used: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct InvitationResponse {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub token: String,
    pub created_by: String,
    pub created_at: String,
    pub expires_at: String,
    pub used: bool,
    pub used_at: Option<String>,
}

impl From<Invitation> for InvitationResponse {
    fn from(invitation: Invitation) -> Self {
        Self {
            id: invitation.id.key().to_string(),
            email: invitation.email,
            role: invitation.role,
            token: invitation.token,
            created_by: invitation.created_by.key().to_string(),
            created_at: invitation.created_at,
            expires_at: invitation.expires_at,
            used: invitation.used,
            used_at: invitation.used_at,
        }
    }
}
