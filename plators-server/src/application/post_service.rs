use tracing::info;

use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFilter, PostInput};

pub(crate) struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts(filter).await
    }

    /// Количество постов без фильтров, для проверки живости.
    pub(crate) async fn count_posts(&self) -> Result<usize, DomainError> {
        let everything = PostFilter::from_query(Some("false"), None);
        Ok(self.repo.list_posts(everything).await?.len())
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .get_post(id)
            .await?
            .ok_or_else(not_found)
    }

    pub(crate) async fn create_post(&self, input: PostInput) -> Result<Post, DomainError> {
        let input = input.validate()?;
        let post = self.repo.create_post(input).await?;
        info!(id = post.id, published = post.published, "post created");
        Ok(post)
    }

    pub(crate) async fn update_post(&self, id: i64, input: PostInput) -> Result<Post, DomainError> {
        let input = input.validate()?;
        let post = self
            .repo
            .update_post(id, input)
            .await?
            .ok_or_else(not_found)?;
        info!(id, published = post.published, "post updated");
        Ok(post)
    }

    pub(crate) async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_post(id).await? {
            return Err(not_found());
        }
        info!(id, "post deleted");
        Ok(())
    }
}

fn not_found() -> DomainError {
    DomainError::NotFound("Post not found".to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::PostService;
    use crate::data::post_repository::PostRepository;
    use crate::domain::error::DomainError;
    use crate::domain::post::{Category, Post, PostFilter, PostInput};

    #[derive(Clone)]
    struct FakePostRepo {
        created_input: Arc<Mutex<Option<PostInput>>>,
        update_call: Arc<Mutex<Option<(i64, PostInput)>>>,
        update_result: Arc<Mutex<Option<Post>>>,
        delete_result: Arc<Mutex<bool>>,
        list_filter: Arc<Mutex<Option<PostFilter>>>,
    }

    impl FakePostRepo {
        fn new() -> Self {
            Self {
                created_input: Arc::new(Mutex::new(None)),
                update_call: Arc::new(Mutex::new(None)),
                update_result: Arc::new(Mutex::new(None)),
                delete_result: Arc::new(Mutex::new(true)),
                list_filter: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn create_post(&self, input: PostInput) -> Result<Post, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Ok(sample_post(1, &input.title))
        }

        async fn get_post(&self, _id: i64) -> Result<Option<Post>, DomainError> {
            Ok(None)
        }

        async fn update_post(&self, id: i64, input: PostInput) -> Result<Option<Post>, DomainError> {
            *self
                .update_call
                .lock()
                .expect("update_call mutex poisoned") = Some((id, input));
            Ok(self
                .update_result
                .lock()
                .expect("update_result mutex poisoned")
                .clone())
        }

        async fn delete_post(&self, _id: i64) -> Result<bool, DomainError> {
            Ok(*self
                .delete_result
                .lock()
                .expect("delete_result mutex poisoned"))
        }

        async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
            *self
                .list_filter
                .lock()
                .expect("list_filter mutex poisoned") = Some(filter);
            Ok(vec![sample_post(1, "listed")])
        }
    }

    fn input(title: &str) -> PostInput {
        PostInput {
            title: title.to_string(),
            excerpt: "excerpt".to_string(),
            content: "content".to_string(),
            category: Category::Video,
            image_url: Some(String::new()),
            video_url: Some("https://x".to_string()),
            published: false,
        }
    }

    fn sample_post(id: i64, title: &str) -> Post {
        let now = Utc::now();
        Post {
            id,
            title: title.to_string(),
            excerpt: String::new(),
            content: String::new(),
            category: Category::Text,
            image_url: None,
            video_url: None,
            published: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_post_validates_before_repo_call() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());

        let err = service
            .create_post(input(""))
            .await
            .expect_err("empty title must be rejected");
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(
            repo.created_input
                .lock()
                .expect("created_input mutex poisoned")
                .is_none()
        );

        service.create_post(input("Test")).await.expect("create must succeed");
        let captured = repo
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone()
            .expect("repo input must be captured");
        assert_eq!(captured.title, "Test");
        assert_eq!(captured.image_url, None);
        assert_eq!(captured.video_url.as_deref(), Some("https://x"));
    }

    #[tokio::test]
    async fn get_post_returns_not_found_when_missing() {
        let service = PostService::new(FakePostRepo::new());
        let err = service.get_post(42).await.expect_err("post must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_post_maps_missing_row_to_not_found() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());

        let err = service
            .update_post(7, input("new"))
            .await
            .expect_err("missing post");
        assert!(matches!(err, DomainError::NotFound(_)));

        let call = repo
            .update_call
            .lock()
            .expect("update_call mutex poisoned")
            .clone()
            .expect("update call must be captured");
        assert_eq!(call.0, 7);
        assert_eq!(call.1.title, "new");
    }

    #[tokio::test]
    async fn delete_post_reports_missing_post() {
        let repo = FakePostRepo::new();
        *repo
            .delete_result
            .lock()
            .expect("delete_result mutex poisoned") = false;

        let service = PostService::new(repo);
        let err = service.delete_post(3).await.expect_err("missing post");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_posts_passes_filter_through() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());
        let filter = PostFilter::from_query(Some("true"), Some("video"));

        let posts = service.list_posts(filter).await.expect("list must succeed");
        assert_eq!(posts.len(), 1);
        assert_eq!(
            *repo.list_filter.lock().expect("list_filter mutex poisoned"),
            Some(filter)
        );
    }

    #[tokio::test]
    async fn count_posts_ignores_publication() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());

        assert_eq!(service.count_posts().await.expect("count must succeed"), 1);
        let captured = *repo.list_filter.lock().expect("list_filter mutex poisoned");
        let filter = captured.expect("filter must be captured");
        assert!(!filter.published_only);
    }
}
