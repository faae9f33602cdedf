use leptos::prelude::*;

use crate::components::admin_page::AdminPage;
use crate::components::public_page::PublicPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Public,
    Admin,
}

#[component]
pub fn App() -> impl IntoView {
    let page = RwSignal::new(Page::Public);

    view! {
        <main class="page">
            <header class="topbar">
                <h1 class="logo">"PLATORS"</h1>
                {move || match page.get() {
                    Page::Public => view! {
                        <button class="nav" on:click=move |_| page.set(Page::Admin)>"Админка"</button>
                    }
                    .into_any(),
                    Page::Admin => view! {
                        <button class="nav" on:click=move |_| page.set(Page::Public)>"На сайт"</button>
                    }
                    .into_any(),
                }}
            </header>

            {move || match page.get() {
                Page::Public => view! { <PublicPage /> }.into_any(),
                Page::Admin => view! { <AdminPage /> }.into_any(),
            }}
        </main>
    }
}
