use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFilter, PostInput};

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: PostInput) -> Result<Post, DomainError>;
    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError>;
    async fn update_post(&self, id: i64, input: PostInput) -> Result<Option<Post>, DomainError>;
    async fn delete_post(&self, id: i64) -> Result<bool, DomainError>;
    /// Посты под фильтром, новые первыми.
    async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError>;
}
