use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{ListQuery, Post, PostPayload};

/// Удалённая коллекция постов: list/create/update/delete.
///
/// Реализуется HTTP-клиентом ([`PostsClient`](crate::PostsClient)) и
/// подделками в тестах.
#[async_trait]
pub trait PostCollection: Send + Sync {
    /// `GET <collection>?published=...`
    async fn list(&self, query: ListQuery) -> ClientResult<Vec<Post>>;

    /// `POST <collection>`
    async fn create(&self, payload: &PostPayload) -> ClientResult<Post>;

    /// `PUT <collection>/{id}`
    async fn update(&self, id: i64, payload: &PostPayload) -> ClientResult<Post>;

    /// `DELETE <collection>/{id}`
    async fn delete(&self, id: i64) -> ClientResult<()>;
}
