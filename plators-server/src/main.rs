use anyhow::Result;

use plators_server::{AppState, InMemoryPostRepository, Settings, demo_posts, init_logging, run_http};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let repo = if settings.seed_demo_posts {
        tracing::info!("seeding demo posts");
        InMemoryPostRepository::with_posts(demo_posts())
    } else {
        InMemoryPostRepository::new()
    };

    run_http(&settings, AppState::new(repo)).await
}
