use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::debug;

use crate::collection::PostCollection;
use crate::error::{ClientError, ClientResult};
use crate::models::{ListQuery, Post, PostPayload};

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент коллекции постов.
///
/// `collection_url` указывает на саму коллекцию, например
/// `http://127.0.0.1:8080/api/posts`; отдельный пост адресуется как
/// `<collection_url>/{id}`.
pub struct PostsClient {
    collection_url: String,
    client: Client,
}

impl PostsClient {
    /// Создаёт клиент коллекции.
    pub fn new(collection_url: impl Into<String>) -> ClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            collection_url: collection_url.into(),
            client,
        })
    }

    /// URL коллекции.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn endpoint(&self, id: Option<i64>) -> String {
        let base = self.collection_url.trim_end_matches('/');
        match id {
            Some(id) => format!("{base}/{id}"),
            None => base.to_string(),
        }
    }

    async fn decode_error(response: reqwest::Response) -> ClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body.error.unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        ClientError::from_http_status(status.as_u16(), Some(message))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ClientResult<reqwest::Response> {
        let response = request.send().await.map_err(ClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response)
    }

    /// универсальный helper для запросов с json-payload и json-ответом
    async fn send_json<TReq, TRes>(&self, method: Method, id: Option<i64>, body: &TReq) -> ClientResult<TRes>
    where
        TReq: Serialize + ?Sized,
        TRes: DeserializeOwned,
    {
        let request = self.client.request(method, self.endpoint(id)).json(body);
        self.send(request)
            .await?
            .json::<TRes>()
            .await
            .map_err(ClientError::from_reqwest)
    }

    /// Возвращает посты коллекции.
    pub async fn list_posts(&self, query: ListQuery) -> ClientResult<Vec<Post>> {
        let request = self.client.request(Method::GET, self.endpoint(None)).query(&query);
        let posts = self
            .send(request)
            .await?
            .json::<Vec<Post>>()
            .await
            .map_err(ClientError::from_reqwest)?;

        debug!(count = posts.len(), published = query.published, "posts listed");
        Ok(posts)
    }

    /// Получает пост по идентификатору.
    pub async fn get_post(&self, id: i64) -> ClientResult<Post> {
        let request = self.client.request(Method::GET, self.endpoint(Some(id)));
        self.send(request)
            .await?
            .json::<Post>()
            .await
            .map_err(ClientError::from_reqwest)
    }

    /// Создаёт пост; `id` назначает коллекция.
    pub async fn create_post(&self, payload: &PostPayload) -> ClientResult<Post> {
        let post: Post = self.send_json(Method::POST, None, payload).await?;
        debug!(id = post.id, "post created");
        Ok(post)
    }

    /// Заменяет поля поста.
    pub async fn update_post(&self, id: i64, payload: &PostPayload) -> ClientResult<Post> {
        let post: Post = self.send_json(Method::PUT, Some(id), payload).await?;
        debug!(id, "post updated");
        Ok(post)
    }

    /// Удаляет пост. Тело успешного ответа не читается.
    pub async fn delete_post(&self, id: i64) -> ClientResult<()> {
        let request = self.client.request(Method::DELETE, self.endpoint(Some(id)));
        self.send(request).await?;
        debug!(id, "post deleted");
        Ok(())
    }
}

#[async_trait]
impl PostCollection for PostsClient {
    async fn list(&self, query: ListQuery) -> ClientResult<Vec<Post>> {
        self.list_posts(query).await
    }

    async fn create(&self, payload: &PostPayload) -> ClientResult<Post> {
        self.create_post(payload).await
    }

    async fn update(&self, id: i64, payload: &PostPayload) -> ClientResult<Post> {
        self.update_post(id, payload).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.delete_post(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_trailing_slash() {
        let client = PostsClient::new("http://localhost:8080/api/posts/").expect("client builds");
        assert_eq!(client.endpoint(None), "http://localhost:8080/api/posts");
        assert_eq!(client.endpoint(Some(42)), "http://localhost:8080/api/posts/42");
    }

    #[test]
    fn endpoint_keeps_function_style_collection_url() {
        let client = PostsClient::new("https://functions.example.dev/8c77").expect("client builds");
        assert_eq!(client.endpoint(Some(1)), "https://functions.example.dev/8c77/1");
    }
}
