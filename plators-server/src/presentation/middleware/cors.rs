use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::infrastructure::settings::Settings;

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// `*` среди источников открывает API для любого origin.
fn allow_origin(origins: &[String]) -> Result<AllowOrigin> {
    if origins.iter().any(|origin| origin == "*") {
        return Ok(AllowOrigin::any());
    }

    let parsed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(AllowOrigin::list(parsed))
}

pub(crate) fn apply_cors(router: Router, settings: &Settings) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(&settings.cors_origins)?)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(86400));

    Ok(router.layer(cors))
}

#[cfg(test)]
mod tests {
    use super::allow_origin;

    #[test]
    fn wildcard_wins_over_listed_origins() {
        let origins = vec!["http://a".to_string(), "*".to_string()];
        assert!(allow_origin(&origins).is_ok());
    }

    #[test]
    fn malformed_origin_is_rejected() {
        let origins = vec!["http://bad\norigin".to_string()];
        assert!(allow_origin(&origins).is_err());
    }
}
