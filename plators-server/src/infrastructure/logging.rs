use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Директивы по умолчанию: собственные логи и `tower_http` на заданном
/// уровне, зависимости только предупреждения.
fn default_directives(level: &str) -> String {
    format!("warn,plators_server={level},tower_http={level}")
}

/// `RUST_LOG` целиком заменяет директивы по умолчанию.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives(level))
            .map_err(|e| anyhow!("invalid LOG_LEVEL '{level}': {e}"))?,
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::default_directives;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn level_applies_to_server_and_http_trace() {
        assert_eq!(
            default_directives("debug"),
            "warn,plators_server=debug,tower_http=debug"
        );
        assert!(EnvFilter::try_new(default_directives("info")).is_ok());
    }

    #[test]
    fn garbage_level_is_rejected() {
        assert!(EnvFilter::try_new(default_directives("not a level!")).is_err());
    }
}
