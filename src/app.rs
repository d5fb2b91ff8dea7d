use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/section/:section", get(handlers::navigate))
        .route("/login", post(handlers::login))
        .route("/admin/login", post(handlers::admin_login))
        .route("/logout", post(handlers::logout))
        .route("/admin/logout", post(handlers::admin_logout))
        .route("/api/view", get(handlers::get_view))
        .with_state(state)
}
