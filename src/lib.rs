use axum::{Router, middleware as axum_middleware};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::auth_session_middleware;
use crate::routes::auth::auth_router;
use crate::state::AppState;

pub mod config;
pub mod consts;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

/// Everything outside the public `/auth` endpoints sits behind the session
/// gate, including the static documentation tree.
pub fn app(state: AppState) -> Router {
    let docs: Router<AppState> = Router::new()
        .fallback_service(ServeDir::new(&state.config.docs_dir))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_session_middleware,
        ));

    Router::new()
        .nest("/auth", auth_router(state.clone()))
        .merge(docs)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
