use std::fmt::Write as _;

use plators_client::{
    AdminFilter, AdminState, CardCover, ListingView, Notice, NoticeLevel, Post, PostCard,
    TabCounts, format_date,
};

pub(crate) const EMPTY_FEED: &str = "Контент не найден";

pub(crate) fn render_listing(view: &ListingView) -> String {
    match view {
        ListingView::Loading => "Загрузка...\n".to_string(),
        ListingView::Empty => format!("{EMPTY_FEED}\n"),
        ListingView::Cards(cards) => cards.iter().map(render_card).collect::<Vec<_>>().join("\n"),
    }
}

pub(crate) fn render_card(card: &PostCard) -> String {
    let mut out = String::new();
    let _ = write!(out, "[{}] {}", card.category_icon, card.category_label);
    if let Some(date) = &card.date {
        let _ = write!(out, " · {date}");
    }
    out.push('\n');
    let _ = writeln!(out, "{}", card.title);
    if !card.excerpt.is_empty() {
        let _ = writeln!(out, "{}", card.excerpt);
    }
    match &card.cover {
        CardCover::Image(url) => {
            let _ = writeln!(out, "обложка: {url}");
        }
        CardCover::Placeholder { icon } => {
            let _ = writeln!(out, "обложка: [{icon}]");
        }
    }
    out
}

pub(crate) fn render_tabs(counts: TabCounts, active: AdminFilter) -> String {
    AdminFilter::TABS
        .iter()
        .map(|tab| {
            let marker = if *tab == active { "*" } else { " " };
            format!("{marker}{} ({})", tab.label(), counts.get(*tab))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub(crate) fn render_admin_row(post: &Post) -> String {
    let status = if post.published { "Опубликовано" } else { "Черновик" };
    let date = post.created_at.map(format_date).unwrap_or_default();
    format!(
        "#{:<4} {:<12} [{}] {} {}",
        post.id,
        status,
        post.category.label(),
        post.title,
        date
    )
    .trim_end()
    .to_string()
}

pub(crate) fn render_admin(state: &AdminState, filter: AdminFilter) -> String {
    let mut out = render_tabs(state.counts(), filter);
    out.push('\n');

    let posts = state.filtered(filter);
    if posts.is_empty() {
        let _ = writeln!(out, "{EMPTY_FEED}");
    }
    for post in posts {
        let _ = writeln!(out, "{}", render_admin_row(post));
    }
    out
}

pub(crate) fn render_notice(notice: &Notice) -> String {
    let prefix = match notice.level {
        NoticeLevel::Success => "✓",
        NoticeLevel::Error => "✗",
    };
    match &notice.description {
        Some(description) => format!("{prefix} {}: {description}", notice.title),
        None => format!("{prefix} {}", notice.title),
    }
}
