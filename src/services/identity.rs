//! Credential store. This is the identity-provider side of the system:
//! credentials are keyed independently of application user records, and a
//! credential may exist without a matching `users` row.

use surrealdb::{Surreal, engine::any::Any};

use crate::consts::auth_const::AUTH_PASSWORD_TABLE;
use crate::errors::{Error, Result};
use crate::models::credential::{CreateCredential, Credential};
use crate::utils::pwd;
use crate::utils::time::time_now;

/// Create an email/password credential and return the generated uid.
pub async fn create_credential(sdb: &Surreal<Any>, email: &str, password: &str) -> Result<String> {
    let email = email.to_lowercase();

    let existing: Vec<Credential> = sdb
        .query("SELECT * FROM type::table($table) WHERE email = $email;")
        .bind(("table", AUTH_PASSWORD_TABLE))
        .bind(("email", email.clone()))
        .await?
        .take(0)?;

    if !existing.is_empty() {
        return Err(Error::EmailExist(email));
    }

    let password_hash = pwd::hash(password.as_bytes())?;
    let credential: Option<Credential> = sdb
        .create(AUTH_PASSWORD_TABLE)
        .content(CreateCredential {
            email,
            password_hash,
            created_at: time_now(),
        })
        .await?;

    let credential = credential.ok_or(Error::InternalServerError)?;
    Ok(credential.id.key().to_string())
}

/// Check an email/password pair. `Some(uid)` on success, `None` for unknown
/// email or wrong password.
pub async fn verify_credential(
    sdb: &Surreal<Any>,
    email: &str,
    password: &str,
) -> Result<Option<String>> {
    let credential = sdb
        .query("SELECT * FROM type::table($table) WHERE email = $email;")
        .bind(("table", AUTH_PASSWORD_TABLE))
        .bind(("email", email.to_lowercase()))
        .await?
        .take::<Vec<Credential>>(0)?
        .into_iter()
        .next();

    let Some(credential) = credential else {
        return Ok(None);
    };

    if pwd::validate(password.as_bytes(), &credential.password_hash)? {
        Ok(Some(credential.id.key().to_string()))
    } else {
        Ok(None)
    }
}

pub async fn delete_credential(sdb: &Surreal<Any>, uid: &str) -> Result<()> {
    let _: Option<Credential> = sdb.delete((AUTH_PASSWORD_TABLE, uid)).await?;
    Ok(())
}
