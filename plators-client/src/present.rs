//! Представление постов в карточках ленты и админки.

use chrono::{DateTime, Utc};

use crate::models::{Category, Post};

impl Category {
    /// Подпись категории в интерфейсе.
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Видео",
            Self::Photo => "Фото",
            Self::Text => "Текст",
        }
    }

    /// Имя иконки категории.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Photo => "Image",
            Self::Text => "FileText",
        }
    }
}

/// Дата в формате локали `ru-RU`: `ДД.ММ.ГГГГ`.
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Обложка карточки.
pub enum CardCover {
    /// Фоновое изображение.
    Image(String),
    /// Иконка категории на тонированном фоне.
    Placeholder {
        /// Имя иконки.
        icon: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Карточка поста, готовая к отрисовке.
pub struct PostCard {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Краткое описание.
    pub excerpt: String,
    /// Подпись категории.
    pub category_label: &'static str,
    /// Иконка категории.
    pub category_icon: &'static str,
    /// Локализованная дата, если сервер её прислал.
    pub date: Option<String>,
    /// Обложка.
    pub cover: CardCover,
    /// Опубликован ли пост (значок "Опубликовано" в админке).
    pub published: bool,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        let cover = match post.image() {
            Some(url) => CardCover::Image(url.to_string()),
            None => CardCover::Placeholder {
                icon: post.category.icon(),
            },
        };

        Self {
            id: post.id,
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            category_label: post.category.label(),
            category_icon: post.category.icon(),
            date: post.created_at.map(format_date),
            cover,
            published: post.published,
        }
    }
}
