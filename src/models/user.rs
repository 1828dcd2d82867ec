use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    Viewer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePermissions {
    pub can_invite_users: bool,
    pub can_manage_users: bool,
    pub can_edit_content: bool,
    pub can_view_content: bool,
}

impl UserRole {
    /// Fixed capability set per role. There are no per-user overrides.
    pub const fn permissions(self) -> RolePermissions {
        match self {
            UserRole::Admin => RolePermissions {
                can_invite_users: true,
                can_manage_users: true,
                can_edit_content: true,
                can_view_content: true,
            },
            UserRole::Editor => RolePermissions {
                can_invite_users: false,
                can_manage_users: false,
                can_edit_content: true,
                can_view_content: true,
            },
            UserRole::Viewer => RolePermissions {
                can_invite_users: false,
                can_manage_users: false,
                can_edit_content: false,
                can_view_content: true,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: RecordId,  // ! users:<uid>
    pub email: String, // ! lowercase & (len = 255)
    pub role: UserRole,
    pub display_name: Option<String>,
    pub created_at: String,
    pub last_login: Option<String>,
    pub invited_by: Option<RecordId>, // ! userId of the inviting admin
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub role: UserRole,
    pub display_name: Option<String>,
    pub created_at: String,
    pub last_login: Option<String>,
    pub invited_by: Option<RecordId>,
}

/// API-facing view of a user; the record id is flattened into a plain uid.
#[derive(Serialize, Debug, Clone)]
pub struct UserResponse {
    pub uid: String,
    pub email: String,
    pub role: UserRole,
    pub display_name: Option<String>,
    pub created_at: String,
    pub last_login: Option<String>,
    pub invited_by: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            uid: user.id.key().to_string(),
            email: user.email,
            role: user.role,
            display_name: user.display_name,
            created_at: user.created_at,
            last_login: user.last_login,
            invited_by: user.invited_by.map(|id| id.key().to_string()),
        }
    }
}
