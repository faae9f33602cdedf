use chrono::{NaiveDate, Utc};

use crate::domain::post::{Category, Post};

const IMAGE_BASE: &str = "https://cdn.poehali.dev/projects/49399c0d-2028-450c-9f8a-60114f05f74f/files";

struct DemoPost {
    title: &'static str,
    excerpt: &'static str,
    category: Category,
    image: Option<&'static str>,
    date: (i32, u32, u32),
}

const DEMO_POSTS: [DemoPost; 6] = [
    DemoPost {
        title: "Будущее цифровых технологий",
        excerpt: "Исследуем последние тренды в мире технологий и их влияние на нашу жизнь",
        category: Category::Video,
        image: Some("b1c16cbe-6fb1-4189-b902-22402c7cfb82.jpg"),
        date: (2024, 11, 25),
    },
    DemoPost {
        title: "Киберпанк эстетика в дизайне",
        excerpt: "Как неоновые цвета и футуристические формы меняют визуальную культуру",
        category: Category::Photo,
        image: Some("9a2dc9fe-1f8a-408f-b8a5-3581a8dcba56.jpg"),
        date: (2024, 11, 24),
    },
    DemoPost {
        title: "Искусственный интеллект и творчество",
        excerpt: "Размышления о том, как ИИ меняет подход к созданию контента",
        category: Category::Text,
        image: Some("8f41a62e-bc72-4ab7-a74c-df9bb6aa79b9.jpg"),
        date: (2024, 11, 23),
    },
    DemoPost {
        title: "Электронная музыка будущего",
        excerpt: "Обзор новых направлений в электронной музыке",
        category: Category::Video,
        image: None,
        date: (2024, 11, 22),
    },
    DemoPost {
        title: "Неоновые города",
        excerpt: "Фотогалерея футуристических городских пейзажей",
        category: Category::Photo,
        image: None,
        date: (2024, 11, 21),
    },
    DemoPost {
        title: "Философия киберпространства",
        excerpt: "Статья о культуре и философии цифровой эпохи",
        category: Category::Text,
        image: None,
        date: (2024, 11, 20),
    },
];

/// Опубликованные демо-посты для пустого хранилища, с `id` от 1.
pub fn demo_posts() -> Vec<Post> {
    DEMO_POSTS
        .iter()
        .zip(1_i64..)
        .map(|(demo, id)| {
            let (year, month, day) = demo.date;
            let created_at = NaiveDate::from_ymd_opt(year, month, day)
                .and_then(|date| date.and_hms_opt(12, 0, 0))
                .map(|value| value.and_utc())
                .unwrap_or_else(Utc::now);

            Post {
                id,
                title: demo.title.to_string(),
                excerpt: demo.excerpt.to_string(),
                content: String::new(),
                category: demo.category,
                image_url: demo.image.map(|file| format!("{IMAGE_BASE}/{file}")),
                video_url: None,
                published: true,
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}
