use std::sync::Arc;

use crate::application::post_service::PostService;
use crate::data::repositories::memory::post_repository::InMemoryPostRepository;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub struct AppState {
    pub(crate) post_service: Arc<PostService<InMemoryPostRepository>>,
}

impl AppState {
    pub fn new(repo: InMemoryPostRepository) -> Self {
        Self {
            post_service: Arc::new(PostService::new(repo)),
        }
    }
}
