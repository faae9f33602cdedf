use leptos::prelude::*;
use leptos::task::spawn_local;
use plators_client::{AdminFilter, AdminState, Category, ListQuery, PostCard, PostDraft, SaveRequest};

use crate::api;
use crate::components::post_card::PostCardView;
use crate::components::toasts::Toasts;

fn refresh(state: RwSignal<AdminState>) {
    let Some(ticket) = state.try_update(AdminState::begin_load) else {
        return;
    };

    spawn_local(async move {
        let result = api::list_posts(ListQuery::manageable()).await;
        if let Err(err) = &result {
            api::log_error("Ошибка загрузки", err);
        }
        state.update(|s| {
            s.finish_load(ticket, result);
        });
    });
}

fn save(state: RwSignal<AdminState>) {
    let Some(request) = state.try_update(AdminState::begin_save).flatten() else {
        return;
    };

    spawn_local(async move {
        let result = match &request {
            SaveRequest::Create(payload) => api::create_post(payload).await,
            SaveRequest::Update { id, payload } => api::update_post(*id, payload).await,
        };
        if let Err(err) = &result {
            api::log_error("Ошибка сохранения", err);
        }
        if state.try_update(|s| s.finish_save(result)).unwrap_or(false) {
            refresh(state);
        }
    });
}

fn delete(state: RwSignal<AdminState>, id: i64) {
    let confirmed = window()
        .confirm_with_message("Удалить статью?")
        .unwrap_or(false);
    let Some(id) = state.try_update(|s| s.begin_delete(id, confirmed)).flatten() else {
        return;
    };

    spawn_local(async move {
        let result = api::delete_post(id).await;
        if let Err(err) = &result {
            api::log_error("Ошибка удаления", err);
        }
        if state.try_update(|s| s.finish_delete(id, result)).unwrap_or(false) {
            refresh(state);
        }
    });
}

fn edit_field(state: RwSignal<AdminState>, apply: impl FnOnce(&mut PostDraft)) {
    state.update(|s| apply(s.editing_mut()));
}

#[component]
pub(crate) fn AdminPage() -> impl IntoView {
    let state = RwSignal::new(AdminState::new());
    let tab = RwSignal::new(AdminFilter::All);
    refresh(state);

    let tabs = AdminFilter::TABS
        .into_iter()
        .map(|filter| {
            view! {
                <button
                    class="tab"
                    class:active=move || tab.get() == filter
                    on:click=move |_| tab.set(filter)
                >
                    {filter.label()}
                    " ("
                    {move || state.with(|s| s.counts().get(filter))}
                    ")"
                </button>
            }
        })
        .collect_view();

    let rows = move || {
        let loading = state.with(|s| s.load_state().is_loading());
        if loading {
            return view! { <p class="status">"Загрузка..."</p> }.into_any();
        }

        let cards: Vec<PostCard> = state.with(|s| {
            s.filtered(tab.get())
                .into_iter()
                .map(PostCard::from)
                .collect()
        });
        if cards.is_empty() {
            return view! { <p class="status">"Контент не найден"</p> }.into_any();
        }

        cards
            .into_iter()
            .map(|card| {
                let id = card.id;
                view! {
                    <div class="admin-row">
                        <PostCardView card=card show_status=true />
                        <div class="actions">
                            <button on:click=move |_| {
                                state.update(|s| {
                                    s.open_edit(id);
                                });
                            }>"Редактировать"</button>
                            <button class="danger" on:click=move |_| delete(state, id)>"Удалить"</button>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="admin">
            <div class="admin-header">
                <h2>"Управление контентом"</h2>
                <button class="primary" on:click=move |_| state.update(AdminState::open_create)>
                    "Создать статью"
                </button>
            </div>

            <nav class="tabs">{tabs}</nav>
            <div class="grid">{rows}</div>

            <Show when=move || state.with(AdminState::is_dialog_open)>
                <EditDialog state=state />
            </Show>

            <Toasts state=state />
        </section>
    }
}

#[component]
fn EditDialog(state: RwSignal<AdminState>) -> impl IntoView {
    let draft = move || state.with(|s| s.editing().clone());

    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            view! {
                <option
                    value=category.as_str()
                    selected=move || state.with(|s| s.editing().category == category)
                >
                    {category.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h3>{move || state.with(AdminState::dialog_title)}</h3>

                <label>"Заголовок"</label>
                <input
                    prop:value=move || draft().title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_field(state, |d| d.title = value);
                    }
                />

                <label>"Краткое описание"</label>
                <textarea
                    rows="2"
                    prop:value=move || draft().excerpt
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_field(state, |d| d.excerpt = value);
                    }
                ></textarea>

                <label>"Содержание"</label>
                <textarea
                    rows="6"
                    prop:value=move || draft().content
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_field(state, |d| d.content = value);
                    }
                ></textarea>

                <label>"Категория"</label>
                <select on:change=move |ev| {
                    if let Ok(category) = event_target_value(&ev).parse::<Category>() {
                        edit_field(state, |d| d.category = category);
                    }
                }>
                    {categories}
                </select>

                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft().published
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            edit_field(state, |d| d.published = checked);
                        }
                    />
                    "Опубликовать"
                </label>

                <label>"URL изображения"</label>
                <input
                    placeholder="https://..."
                    prop:value=move || draft().image_url
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_field(state, |d| d.image_url = value);
                    }
                />

                <Show when=move || state.with(|s| s.editing().shows_video_url())>
                    <label>"URL видео"</label>
                    <input
                        placeholder="https://..."
                        prop:value=move || draft().video_url
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_field(state, |d| d.video_url = value);
                        }
                    />
                </Show>

                <div class="dialog-actions">
                    <button on:click=move |_| state.update(AdminState::close_dialog)>"Отмена"</button>
                    <button
                        class="primary"
                        disabled=move || !state.with(AdminState::can_save)
                        on:click=move |_| save(state)
                    >
                        {move || if state.with(AdminState::is_saving) { "Сохранение..." } else { "Сохранить" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
