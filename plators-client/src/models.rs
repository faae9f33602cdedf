use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Категория поста. Других значений коллекция не принимает.
pub enum Category {
    /// Видео.
    Video,
    /// Фото.
    Photo,
    /// Текст (категория нового черновика).
    #[default]
    Text,
}

impl Category {
    /// Все категории в порядке вкладок.
    pub const ALL: [Category; 3] = [Category::Video, Category::Photo, Category::Text];

    /// Значение категории на проводе (`video`, `photo`, `text`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Photo => "photo",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value '{0}'")]
/// Ошибка разбора категории или фильтра из строки.
pub struct ParseValueError(pub String);

impl FromStr for Category {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(Self::Video),
            "photo" => Ok(Self::Photo),
            "text" => Ok(Self::Text),
            _ => Err(ParseValueError(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Сохранённый пост в том виде, в котором его отдаёт коллекция.
pub struct Post {
    /// Идентификатор, назначенный коллекцией.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Краткое описание.
    #[serde(default, deserialize_with = "nullable_string")]
    pub excerpt: String,
    /// Полный текст.
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
    /// Категория.
    pub category: Category,
    /// URL изображения для обложки карточки.
    #[serde(default)]
    pub image_url: Option<String>,
    /// URL видео (имеет смысл только для категории `video`).
    #[serde(default)]
    pub video_url: Option<String>,
    /// Опубликован ли пост.
    #[serde(default)]
    pub published: bool,
    /// Время создания (назначается сервером).
    #[serde(default, alias = "date", with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// Время последнего обновления.
    #[serde(default, with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// URL обложки, если он задан и не пуст.
    pub fn image(&self) -> Option<&str> {
        present(self.image_url.as_deref())
    }

    /// URL видео, если он задан и не пуст.
    pub fn video(&self) -> Option<&str> {
        present(self.video_url.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Буфер редактирования, привязанный к форме админки.
///
/// `id` есть только у постов, которые уже были сохранены в коллекции.
pub struct PostDraft {
    /// Идентификатор сохранённого поста; `None` для нового черновика.
    pub id: Option<i64>,
    /// Заголовок.
    pub title: String,
    /// Краткое описание.
    pub excerpt: String,
    /// Полный текст.
    pub content: String,
    /// Категория.
    pub category: Category,
    /// URL изображения (пустая строка означает отсутствие).
    pub image_url: String,
    /// URL видео (пустая строка означает отсутствие).
    pub video_url: String,
    /// Флаг публикации.
    pub published: bool,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: Category::Text,
            image_url: String::new(),
            video_url: String::new(),
            published: false,
        }
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            id: Some(post.id),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            category: post.category,
            image_url: post.image_url.clone().unwrap_or_default(),
            video_url: post.video_url.clone().unwrap_or_default(),
            published: post.published,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Поле формы редактирования.
pub enum FormField {
    /// Заголовок.
    Title,
    /// Краткое описание.
    Excerpt,
    /// Полный текст.
    Content,
    /// Выбор категории.
    Category,
    /// Переключатель публикации.
    Published,
    /// URL изображения.
    ImageUrl,
    /// URL видео, только для категории `video`.
    VideoUrl,
}

impl PostDraft {
    /// Был ли пост уже сохранён в коллекции.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Показывать ли поле URL видео.
    pub fn shows_video_url(&self) -> bool {
        self.category == Category::Video
    }

    /// Поля формы в порядке отображения.
    pub fn form_fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::Title,
            FormField::Excerpt,
            FormField::Content,
            FormField::Category,
            FormField::Published,
            FormField::ImageUrl,
        ];
        if self.shows_video_url() {
            fields.push(FormField::VideoUrl);
        }
        fields
    }

    /// Тело запроса create/update. `id` в тело не попадает.
    pub fn to_payload(&self) -> PostPayload {
        let video_url = if self.shows_video_url() {
            present(Some(&self.video_url)).map(str::to_string)
        } else {
            None
        };

        PostPayload {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            category: self.category,
            image_url: present(Some(&self.image_url)).map(str::to_string),
            video_url,
            published: self.published,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// JSON-тело запросов `POST <collection>` и `PUT <collection>/{id}`.
pub struct PostPayload {
    /// Заголовок.
    pub title: String,
    /// Краткое описание.
    pub excerpt: String,
    /// Полный текст.
    pub content: String,
    /// Категория.
    pub category: Category,
    /// URL изображения или `null`.
    pub image_url: Option<String>,
    /// URL видео или `null`.
    pub video_url: Option<String>,
    /// Флаг публикации.
    pub published: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Параметры запроса списка `GET <collection>`.
pub struct ListQuery {
    /// `true`: только опубликованные; `false`: без фильтра публикации.
    pub published: bool,
    /// Серверный фильтр по категории.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl ListQuery {
    /// Запрос публичной ленты.
    pub fn published() -> Self {
        Self {
            published: true,
            category: None,
        }
    }

    /// Запрос админки: все посты, включая опубликованные.
    pub fn manageable() -> Self {
        Self {
            published: false,
            category: None,
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Временные метки коллекции: RFC 3339, `YYYY-MM-DD HH:MM:SS[.f][+hh:mm]`
/// или просто дата.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();

        if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
            return Some(value.with_timezone(&Utc));
        }
        if let Ok(value) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
            return Some(value.with_timezone(&Utc));
        }
        for format in NAIVE_FORMATS {
            if let Ok(value) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(value.and_utc());
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|value| value.and_utc())
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("unsupported timestamp '{raw}'"))),
        }
    }

    pub(crate) fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&value.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }
}
