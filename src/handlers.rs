use crate::controller;
use crate::models::{AdminLoginForm, LoginForm};
use crate::state::AppState;
use crate::ui::render_page;
use crate::view::{build_view, PageView};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};

/// Renders the page. A pending alert is shown once and then dropped.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut page = state.page.lock().await;
    let view = build_view(&page);
    page.take_alert();
    Html(render_page(&view))
}

pub async fn get_view(State(state): State<AppState>) -> Json<PageView> {
    let page = state.page.lock().await;
    Json(build_view(&page))
}

pub async fn navigate(State(state): State<AppState>, Path(section): Path<String>) -> Redirect {
    controller::navigate(&state, &section).await;
    Redirect::to("/")
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Redirect {
    controller::login_user(&state, form.tg_id.trim()).await;
    Redirect::to("/")
}

pub async fn admin_login(
    State(state): State<AppState>,
    Form(form): Form<AdminLoginForm>,
) -> Redirect {
    controller::login_admin(&state, form.admin_id.trim()).await;
    Redirect::to("/")
}

pub async fn logout(State(state): State<AppState>) -> Redirect {
    controller::logout_user(&state).await;
    Redirect::to("/")
}

pub async fn admin_logout(State(state): State<AppState>) -> Redirect {
    controller::logout_admin(&state).await;
    Redirect::to("/")
}
