use leptos::prelude::*;

use crate::core::config::{BoardConfig, Locale};
use crate::features::kanban::services::BoardNotice;

#[component]
pub fn KanbanHeader(
    on_save: Callback<()>,
    notice: ReadSignal<Option<BoardNotice>>,
) -> impl IntoView {
    let locale = use_context::<BoardConfig>().unwrap_or_default().locale;
    let (title, save_label) = match locale {
        Locale::En => ("My Board", "Save all cards"),
        Locale::Zh => ("我的看板", "保存所有卡片"),
    };

    view! {
        <header class="kanban-header">
            <h1>
                {title}
                <button class="btn-primary kanban-header-btn" on:click=move |_| on_save.run(())>
                    {save_label}
                </button>
            </h1>
            {move || notice.get().map(|notice| view! {
                <p class="board-notice" class:error=notice.is_error()>{notice.message(locale)}</p>
            })}
        </header>
    }
}
