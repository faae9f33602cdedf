use leptos::prelude::*;
use leptos::task::spawn_local;
use plators_client::{CategoryFilter, ListQuery, ListingView, PublicState};

use crate::api;
use crate::components::post_card::PostCardView;

fn load(state: RwSignal<PublicState>) {
    let Some(ticket) = state.try_update(PublicState::begin_load) else {
        return;
    };

    spawn_local(async move {
        let result = api::list_posts(ListQuery::published()).await;
        if let Err(err) = &result {
            api::log_error("Ошибка загрузки", err);
        }
        state.update(|s| {
            s.finish_load(ticket, result);
        });
    });
}

#[component]
pub(crate) fn PublicPage() -> impl IntoView {
    let state = RwSignal::new(PublicState::new());
    load(state);

    let tabs = CategoryFilter::TABS
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="tab"
                    class:active=move || state.with(|s| s.filter() == tab)
                    on:click=move |_| state.update(|s| s.set_filter(tab))
                >
                    <span class=format!("icon icon-{}", tab.icon())></span>
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="hero">
            <h2>"Цифровой контент будущего"</h2>
            <p>"Видео, фото и статьи о технологиях, дизайне и культуре"</p>
        </section>

        <nav class="tabs">{tabs}</nav>

        <section class="grid">
            {move || match state.with(PublicState::view) {
                ListingView::Loading => view! { <p class="status">"Загрузка..."</p> }.into_any(),
                ListingView::Empty => view! { <p class="status">"Контент не найден"</p> }.into_any(),
                ListingView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <PostCardView card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </section>
    }
}
