use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use crate::{
    middleware::auth_session_middleware,
    routes::auth::{
        invitation::{create_invitation, list_invitations, validate_invitation},
        manage_users::{delete_user, list_users, update_user_role},
        user::{session, sign_in, sign_in_with_google, sign_out, sign_up},
    },
    state::AppState,
};

pub mod invitation;
pub mod manage_users;
pub mod user;

pub fn auth_router(config: AppState) -> Router<AppState> {
    Router::new()
        .merge(unprotected(config.clone()))
        .merge(protected(config.clone()))
        .with_state(config)
}

fn unprotected(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/signin", post(sign_in))
        .route("/signin/google", post(sign_in_with_google))
        .route("/signup", post(sign_up))
        .route("/invitations/validate", get(validate_invitation))
        .with_state(config)
}

fn protected(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/signout", post(sign_out))
        .route("/session", get(session))
        // ! admin: user management
        .route("/users", get(list_users))
        .route("/users/{uid}/role", patch(update_user_role))
        .route("/users/{uid}", delete(delete_user))
        // ! admin: invitations
        .route("/invitations", post(create_invitation))
        .route("/invitations", get(list_invitations))
        .layer(middleware::from_fn_with_state(
            config.clone(),
            auth_session_middleware,
        ))
        .with_state(config)
}
