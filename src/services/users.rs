use surrealdb::{RecordId, Surreal, engine::any::Any};

use crate::consts::auth_const::USER_TABLE;
use crate::errors::{Error, Result};
use crate::models::user::{CreateUser, User, UserRole};
use crate::utils::time::time_now;

pub async fn create_user(
    sdb: &Surreal<Any>,
    uid: &str,
    email: &str,
    role: UserRole,
    invited_by: Option<RecordId>,
) -> Result<User> {
    let user_data = CreateUser {
        email: email.to_lowercase(),
        role,
        display_name: None,
        created_at: time_now(),
        last_login: Some(time_now()),
        invited_by,
    };

    let user: Option<User> = sdb.create((USER_TABLE, uid)).content(user_data).await?;
    user.ok_or(Error::InternalServerError)
}

pub async fn get_user(sdb: &Surreal<Any>, uid: &str) -> Result<Option<User>> {
    Ok(sdb.select((USER_TABLE, uid)).await?)
}

pub async fn get_user_by_email(sdb: &Surreal<Any>, email: &str) -> Result<Option<User>> {
    Ok(sdb
        .query("SELECT * FROM type::table($table) WHERE email = $email;")
        .bind(("table", USER_TABLE))
        .bind(("email", email.to_lowercase()))
        .await?
        .take::<Vec<User>>(0)?
        .into_iter()
        .next())
}

pub async fn update_last_login(sdb: &Surreal<Any>, uid: &str) -> Result<()> {
    let _: Option<User> = sdb
        .update((USER_TABLE, uid))
        .merge(serde_json::json!({ "last_login": time_now() }))
        .await?;
    Ok(())
}

pub async fn get_all_users(sdb: &Surreal<Any>) -> Result<Vec<User>> {
    Ok(sdb.select(USER_TABLE).await?)
}

pub async fn update_user_role(
    sdb: &Surreal<Any>,
    uid: &str,
    role: UserRole,
) -> Result<Option<User>> {
    Ok(sdb
        .update((USER_TABLE, uid))
        .merge(serde_json::json!({ "role": role }))
        .await?)
}

pub async fn delete_user(sdb: &Surreal<Any>, uid: &str) -> Result<Option<User>> {
    Ok(sdb.delete((USER_TABLE, uid)).await?)
}

#[cfg(test)]
mod tests {
    use surrealdb::engine::any::connect;

    use super::*;

    async fn test_db() -> Surreal<Any> {
        let sdb = connect("mem://").await.expect("mem engine");
        sdb.use_ns("test").use_db("test").await.expect("namespace");
        sdb
    }

    #[tokio::test]
    async fn create_and_get_by_uid() {
        let sdb = test_db().await;

        let created = create_user(&sdb, "u1", "Someone@Example.com", UserRole::Viewer, None)
            .await
            .unwrap();
        assert_eq!(created.email, "someone@example.com");
        assert!(created.last_login.is_some());

        let fetched = get_user(&sdb, "u1").await.unwrap().expect("user exists");
        assert_eq!(fetched.role, UserRole::Viewer);

        assert!(get_user(&sdb, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lookup_by_email_is_case_insensitive() {
        let sdb = test_db().await;
        create_user(&sdb, "u1", "someone@example.com", UserRole::Editor, None)
            .await
            .unwrap();

        let fetched = get_user_by_email(&sdb, "SOMEONE@EXAMPLE.com")
            .await
            .unwrap()
            .expect("user exists");
        assert_eq!(fetched.id.key().to_string(), "u1");
    }

    #[tokio::test]
    async fn role_update_and_delete() {
        let sdb = test_db().await;
        create_user(&sdb, "u1", "someone@example.com", UserRole::Viewer, None)
            .await
            .unwrap();

        let updated = update_user_role(&sdb, "u1", UserRole::Admin)
            .await
            .unwrap()
            .expect("user exists");
        assert_eq!(updated.role, UserRole::Admin);

        assert!(
            update_user_role(&sdb, "missing", UserRole::Admin)
                .await
                .unwrap()
                .is_none()
        );

        delete_user(&sdb, "u1").await.unwrap();
        assert!(get_user(&sdb, "u1").await.unwrap().is_none());
    }
}
