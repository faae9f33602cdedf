use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Video,
    Photo,
    Text,
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "video" => Ok(Self::Video),
            "photo" => Ok(Self::Photo),
            "text" => Ok(Self::Text),
            _ => Err(DomainError::Validation {
                field: "category",
                message: "must be one of video, photo, text",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Поля поста, которые задаёт клиент при создании и обновлении.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PostInput {
    pub(crate) title: String,
    pub(crate) excerpt: String,
    pub(crate) content: String,
    pub(crate) category: Category,
    pub(crate) image_url: Option<String>,
    pub(crate) video_url: Option<String>,
    pub(crate) published: bool,
}

impl PostInput {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let title_len = self.title.chars().count();
        if title_len == 0 || title_len > 255 {
            return Err(DomainError::Validation {
                field: "title",
                message: "must be 1..255 chars",
            });
        }

        Ok(Self {
            image_url: non_empty(self.image_url),
            video_url: non_empty(self.video_url),
            ..self
        })
    }
}

/// Серверный фильтр списка.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PostFilter {
    pub(crate) published_only: bool,
    pub(crate) category: CategoryFilter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum CategoryFilter {
    #[default]
    Any,
    Only(Category),
    /// Неизвестная категория: под неё не попадает ни один пост.
    Unmatched,
}

impl PostFilter {
    /// `published` по умолчанию `true`; любое значение, кроме `true`
    /// (без учёта регистра), снимает фильтр публикации. `category` пустая или
    /// `all` не фильтрует.
    pub(crate) fn from_query(published: Option<&str>, category: Option<&str>) -> Self {
        let published_only = published.is_none_or(|value| value.eq_ignore_ascii_case("true"));
        let category = match category {
            None | Some("") | Some("all") => CategoryFilter::Any,
            Some(raw) => raw
                .parse::<Category>()
                .map(CategoryFilter::Only)
                .unwrap_or(CategoryFilter::Unmatched),
        };

        Self {
            published_only,
            category,
        }
    }

    pub(crate) fn matches(&self, post: &Post) -> bool {
        if self.published_only && !post.published {
            return false;
        }
        match self.category {
            CategoryFilter::Any => true,
            CategoryFilter::Only(category) => post.category == category,
            CategoryFilter::Unmatched => false,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
