//! Клиентские фильтры вкладок. Переключение вкладки никогда не ходит в сеть:
//! фильтр применяется к уже загруженному списку.

use std::fmt;
use std::str::FromStr;

use crate::models::{Category, ParseValueError, Post};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Вкладки админки.
pub enum AdminFilter {
    /// Все статьи.
    #[default]
    All,
    /// Только опубликованные.
    Published,
    /// Только черновики.
    Draft,
}

impl AdminFilter {
    /// Вкладки в порядке отображения.
    pub const TABS: [AdminFilter; 3] = [AdminFilter::All, AdminFilter::Published, AdminFilter::Draft];

    /// Попадает ли пост во вкладку.
    pub fn matches(self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Published => post.published,
            Self::Draft => !post.published,
        }
    }

    /// Подпись вкладки.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Все статьи",
            Self::Published => "Опубликованные",
            Self::Draft => "Черновики",
        }
    }

    /// Значение для командной строки.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }
}

impl fmt::Display for AdminFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminFilter {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "published" => Ok(Self::Published),
            "draft" => Ok(Self::Draft),
            _ => Err(ParseValueError(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Вкладки публичной ленты.
pub enum CategoryFilter {
    /// Все категории.
    #[default]
    All,
    /// Одна категория.
    Only(Category),
}

impl CategoryFilter {
    /// Вкладки в порядке отображения.
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Video),
        CategoryFilter::Only(Category::Photo),
        CategoryFilter::Only(Category::Text),
    ];

    /// Попадает ли пост во вкладку.
    pub fn matches(self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => post.category == category,
        }
    }

    /// Подпись вкладки.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Only(category) => category.label(),
        }
    }

    /// Имя иконки вкладки.
    pub fn icon(self) -> &'static str {
        match self {
            Self::All => "Sparkles",
            Self::Only(category) => category.icon(),
        }
    }

    /// Значение для командной строки.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        raw.parse::<Category>().map(Self::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Счётчики вкладок админки.
pub struct TabCounts {
    /// Все статьи.
    pub all: usize,
    /// Опубликованные.
    pub published: usize,
    /// Черновики.
    pub draft: usize,
}

impl TabCounts {
    /// Считает посты по вкладкам.
    pub fn from_posts(posts: &[Post]) -> Self {
        let published = posts.iter().filter(|post| post.published).count();
        Self {
            all: posts.len(),
            published,
            draft: posts.len() - published,
        }
    }

    /// Счётчик конкретной вкладки.
    pub fn get(&self, filter: AdminFilter) -> usize {
        match filter {
            AdminFilter::All => self.all,
            AdminFilter::Published => self.published,
            AdminFilter::Draft => self.draft,
        }
    }
}

/// Посты, попадающие в фильтр, в исходном порядке.
pub fn apply<'a, F>(posts: &'a [Post], predicate: F) -> Vec<&'a Post>
where
    F: Fn(&Post) -> bool,
{
    posts.iter().filter(|post| predicate(post)).collect()
}
