use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFilter, PostInput};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    posts: BTreeMap<i64, Post>,
}

/// Хранилище постов в памяти процесса.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище с готовыми постами. Следующий `id` идёт после максимального.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let posts: BTreeMap<i64, Post> = posts.into_iter().map(|post| (post.id, post)).collect();
        let last_id = posts.keys().next_back().copied().unwrap_or(0);

        Self {
            store: Arc::new(RwLock::new(Store { last_id, posts })),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, input: PostInput) -> Result<Post, DomainError> {
        let mut store = self.store.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| DomainError::Unexpected("post id overflow".to_string()))?;
        store.last_id = id;

        let now = Utc::now();
        let post = Post {
            id,
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            category: input.category,
            image_url: input.image_url,
            video_url: input.video_url,
            published: input.published,
            created_at: now,
            updated_at: now,
        };
        store.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        Ok(self.store.read().await.posts.get(&id).cloned())
    }

    async fn update_post(&self, id: i64, input: PostInput) -> Result<Option<Post>, DomainError> {
        let mut store = self.store.write().await;
        let Some(post) = store.posts.get_mut(&id) else {
            return Ok(None);
        };

        post.title = input.title;
        post.excerpt = input.excerpt;
        post.content = input.content;
        post.category = input.category;
        post.image_url = input.image_url;
        post.video_url = input.video_url;
        post.published = input.published;
        post.updated_at = Utc::now().max(post.created_at);

        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.store.write().await.posts.remove(&id).is_some())
    }

    async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store
            .posts
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect();

        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::InMemoryPostRepository;
    use crate::data::post_repository::PostRepository;
    use crate::domain::post::{Category, Post, PostFilter, PostInput};

    fn input(title: &str, published: bool) -> PostInput {
        PostInput {
            title: title.to_string(),
            excerpt: String::new(),
            content: String::new(),
            category: Category::Text,
            image_url: None,
            video_url: None,
            published,
        }
    }

    fn all() -> PostFilter {
        PostFilter::from_query(Some("false"), None)
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create_post(input("a", false)).await.expect("create a");
        let second = repo.create_post(input("b", false)).await.expect("create b");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let repo = InMemoryPostRepository::new();
        for title in ["a", "b", "c"] {
            repo.create_post(input(title, true)).await.expect("create");
        }

        let titles: Vec<String> = repo
            .list_posts(all())
            .await
            .expect("list")
            .into_iter()
            .map(|post| post.title)
            .collect();
        assert_eq!(titles, ["c", "b", "a"]);
    }

    #[tokio::test]
    async fn seeded_posts_keep_their_dates_and_ids_continue() {
        let old = Utc::now() - Duration::days(3);
        let seeded = Post {
            id: 6,
            title: "seeded".to_string(),
            excerpt: String::new(),
            content: String::new(),
            category: Category::Photo,
            image_url: None,
            video_url: None,
            published: true,
            created_at: old,
            updated_at: old,
        };
        let repo = InMemoryPostRepository::with_posts([seeded]);

        let created = repo.create_post(input("fresh", true)).await.expect("create");
        assert_eq!(created.id, 7);

        let listed = repo.list_posts(PostFilter::default()).await.expect("list");
        assert_eq!(listed[0].id, 7);
        assert_eq!(listed[1].created_at, old);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_posts() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.update_post(5, input("x", true)).await.expect("update").is_none());
        assert!(!repo.delete_post(5).await.expect("delete"));

        let post = repo.create_post(input("x", false)).await.expect("create");
        let updated = repo
            .update_post(post.id, input("y", true))
            .await
            .expect("update")
            .expect("post exists");
        assert_eq!(updated.title, "y");
        assert!(updated.published);
        assert!(updated.updated_at >= updated.created_at);
        assert!(repo.delete_post(post.id).await.expect("delete"));
        assert!(repo.get_post(post.id).await.expect("get").is_none());
    }
}
