use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::post::{Category, Post, PostFilter, PostInput};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct PostBodyDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) excerpt: Option<String>,
    #[serde(default)]
    pub(crate) content: Option<String>,
    #[schema(example = "video")]
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) image_url: Option<String>,
    #[serde(default)]
    pub(crate) video_url: Option<String>,
    #[serde(default)]
    pub(crate) published: Option<bool>,
}

impl PostBodyDto {
    fn into_input(self) -> AppResult<PostInput> {
        self.validate()?;
        let category = self.category.parse::<Category>()?;

        Ok(PostInput {
            title: self.title,
            excerpt: self.excerpt.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            category,
            image_url: self.image_url,
            video_url: self.video_url,
            published: self.published.unwrap_or(false),
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ListPostsQuery {
    pub(crate) published: Option<String>,
    pub(crate) category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) excerpt: String,
    pub(crate) content: String,
    pub(crate) category: Category,
    pub(crate) image_url: Option<String>,
    pub(crate) video_url: Option<String>,
    pub(crate) published: bool,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct DeletedDto {
    pub(crate) message: String,
    pub(crate) id: i64,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            excerpt: post.excerpt,
            content: post.content,
            category: post.category,
            image_url: post.image_url,
            video_url: post.video_url,
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(
        ("published" = Option<String>, Query, description = "`true` (default): published only; anything else: all posts"),
        ("category" = Option<String>, Query, description = "video | photo | text | all")
    ),
    responses(
        (status = 200, description = "Posts listed, newest first", body = [PostDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let filter = PostFilter::from_query(query.published.as_deref(), query.category.as_deref());
    let posts = state.post_service.list_posts(filter).await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let post = state.post_service.get_post(id).await?;
    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = PostBodyDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<PostBodyDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let Json(dto) = body?;
    let input = dto.into_input()?;
    let post = state.post_service.create_post(input).await?;
    Ok((StatusCode::CREATED, Json(PostDto::from(post))))
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    request_body = PostBodyDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<PostBodyDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let Json(dto) = body?;
    let input = dto.into_input()?;
    let post = state.post_service.update_post(id, input).await?;
    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post deleted", body = DeletedDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<DeletedDto>)> {
    state.post_service.delete_post(id).await?;
    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: "Post deleted".to_string(),
            id,
        }),
    ))
}
