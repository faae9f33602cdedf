//! Заглушка удалённой коллекции постов PLATORS: REST API поверх хранилища в памяти.

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

pub use data::repositories::memory::post_repository::InMemoryPostRepository;
pub use domain::post::{Category, Post};
pub use infrastructure::logging::init_logging;
pub use infrastructure::seed::demo_posts;
pub use infrastructure::settings::Settings;
pub use presentation::AppState;
pub use server::{build_app, build_router, run_http, serve};
