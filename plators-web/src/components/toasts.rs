use std::time::Duration;

use leptos::prelude::*;
use plators_client::{AdminState, NoticeLevel};

const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Уведомления админки. Скрываются по таймеру или по клику.
#[component]
pub(crate) fn Toasts(state: RwSignal<AdminState>) -> impl IntoView {
    let latest = Memo::new(move |_| state.with(|admin| admin.notices().last().map(|notice| notice.id)));

    // Уведомление, вытесненное новым или закрытое кликом, таймер уже не найдёт.
    Effect::new(move |_| {
        if let Some(id) = latest.get() {
            set_timeout(
                move || {
                    state.update(|admin| {
                        admin.dismiss_notice(id);
                    })
                },
                NOTICE_TTL,
            );
        }
    });

    view! {
        <div class="toasts">
            {move || {
                state.with(|admin| {
                    admin
                        .notices()
                        .iter()
                        .map(|notice| {
                            let id = notice.id;
                            let class = match notice.level {
                                NoticeLevel::Success => "toast success",
                                NoticeLevel::Error => "toast error",
                            };
                            let title = notice.title.clone();
                            let description = notice.description.clone();
                            view! {
                                <div
                                    class=class
                                    on:click=move |_| {
                                        state.update(|admin| {
                                            admin.dismiss_notice(id);
                                        })
                                    }
                                >
                                    <strong>{title}</strong>
                                    {description.map(|text| view! { <p>{text}</p> })}
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
