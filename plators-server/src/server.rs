use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::infrastructure::settings::Settings;
use crate::presentation::middleware::cors::apply_cors;
use crate::presentation::middleware::limits::apply_limits;
use crate::presentation::middleware::trace::apply_trace;
use crate::presentation::openapi::ApiDoc;
use crate::presentation::{AppState, http_handlers};

/// Поднимает HTTP-сервер коллекции и обслуживает запросы до остановки процесса.
pub async fn run_http(settings: &Settings, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&settings.http_addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    serve(listener, settings, state).await
}

/// Обслуживает запросы на уже открытом сокете (тесты слушают эфемерный порт).
pub async fn serve(listener: TcpListener, settings: &Settings, state: AppState) -> anyhow::Result<()> {
    let app = build_app(settings, state)?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Роутер со всеми слоями: трассировка, лимиты, CORS.
pub fn build_app(settings: &Settings, state: AppState) -> anyhow::Result<Router> {
    let app = build_router(state);
    let app = apply_trace(app);
    let app = apply_limits(app, settings);
    apply_cors(app, settings)
}

pub fn build_router(state: AppState) -> Router {
    http_handlers::routes(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
