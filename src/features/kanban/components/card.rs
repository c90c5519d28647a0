use chrono::Utc;
use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::core::console;
use crate::core::models::Card;
use crate::core::services::relative_time;

/// One draggable card. Keeps its own "time ago" label fresh on a timer that
/// lives exactly as long as the card is mounted.
#[component]
pub fn KanbanCard(card: Card, on_drag_start: Callback<String>) -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let locale = config.locale;
    let created = card.status;

    let (now, set_now) = signal(Utc::now());
    match set_interval_with_handle(move || set_now.set(Utc::now()), config.refresh_interval()) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => web_sys::console::error_1(&e),
    }
    let label = move || relative_time(created, now.get()).localized(locale);

    let handle_drag_start = {
        let card_id = card.id.clone();
        let title = card.title.clone();
        move |ev: DragEvent| {
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_effect_allowed("move");
                // Informational only, the move itself is resolved from the drag context
                if let Err(e) = transfer.set_data("text/plain", &title) {
                    console::error(&format!("Failed to set drag payload for '{}': {:?}", title, e));
                }
            }
            on_drag_start.run(card_id.clone());
        }
    };

    view! {
        <li class="kanban-card" draggable="true" on:dragstart=handle_drag_start>
            <div class="kanban-card-title">{card.title}</div>
            <div class="kanban-card-time" title=created.to_rfc3339()>{label}</div>
        </li>
    }
}
