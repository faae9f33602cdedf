use leptos::prelude::*;
use plators_client::{CardCover, PostCard};

#[component]
pub(crate) fn PostCardView(card: PostCard, #[prop(optional)] show_status: bool) -> impl IntoView {
    let cover = match card.cover {
        CardCover::Image(url) => view! {
            <div class="cover" style=format!("background-image: url('{url}')")></div>
        }
        .into_any(),
        CardCover::Placeholder { icon } => view! {
            <div class="cover placeholder">
                <span class=format!("icon icon-{icon}")></span>
            </div>
        }
        .into_any(),
    };
    let status = show_status.then(|| {
        if card.published {
            view! { <span class="badge published">"Опубликовано"</span> }.into_any()
        } else {
            view! { <span class="badge draft">"Черновик"</span> }.into_any()
        }
    });

    view! {
        <article class="card">
            {cover}
            <div class="card-body">
                <div class="meta">
                    <span class=format!("icon icon-{}", card.category_icon)></span>
                    <span class="category">{card.category_label}</span>
                    {card.date.map(|date| view! { <span class="date">{date}</span> })}
                    {status}
                </div>
                <h3>{card.title}</h3>
                <p>{card.excerpt}</p>
            </div>
        </article>
    }
}
