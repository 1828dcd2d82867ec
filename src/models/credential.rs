use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Identity-provider credential. Lives in its own table, keyed independently
/// of the application user record; the record key is the uid.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Credential {
    pub id: RecordId,
    pub email: String,         // ! lowercase & unique
    pub password_hash: String, // ! & (len = 255)
    pub created_at: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateCredential {
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}
