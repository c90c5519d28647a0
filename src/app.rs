use leptos::prelude::*;

use crate::core::BoardConfig;
use crate::pages::Kanban;

#[component]
pub fn App(#[prop(optional)] config: Option<BoardConfig>) -> impl IntoView {
    provide_context(config.unwrap_or_default());

    view! {
        <main class="app">
            <Kanban />
        </main>
    }
}
