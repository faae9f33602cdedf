use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use super::{AppState, routes};
use crate::presentation::app_error::AppResult;

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(routes::router())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
    version: &'static str,
    posts: usize,
}

/// Проверка живости: заодно проверяет, что хранилище отвечает.
async fn health_handler(State(state): State<AppState>) -> AppResult<Json<HealthzResponse>> {
    let posts = state.post_service.count_posts().await?;
    Ok(Json(HealthzResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        posts,
    }))
}
