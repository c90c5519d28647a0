use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::config::{BoardConfig, Locale};
use crate::core::models::{ColumnDragState, ColumnId};

/// Drop target for one column. Holds no state of its own: the drag state it
/// shows is derived from the board's drag context.
#[component]
pub fn KanbanColumn(
    column: ColumnId,
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] state: Signal<ColumnDragState>,
    /// Renders the add button when set
    on_add: Option<Callback<()>>,
    #[prop(into)] add_disabled: Signal<bool>,
    on_drag_source: Callback<ColumnId>,
    on_drag_enter: Callback<ColumnId>,
    on_drag_leave: Callback<ColumnId>,
    on_drop: Callback<()>,
    on_drag_end: Callback<()>,
    children: Children,
) -> impl IntoView {
    let locale = use_context::<BoardConfig>().unwrap_or_default().locale;
    let add_label = match locale {
        Locale::En => "⊕ Add card",
        Locale::Zh => "⊕ 添加新卡片",
    };

    view! {
        <section
            class=move || format!("kanban-column column-{} {}", column.key(), state.get().css_class())
            on:dragstart=move |_| on_drag_source.run(column)
            on:dragover=move |ev: DragEvent| {
                // Required for the browser to allow a drop here
                ev.prevent_default();
                if let Some(transfer) = ev.data_transfer() {
                    transfer.set_drop_effect("move");
                }
                on_drag_enter.run(column);
            }
            on:dragleave=move |ev: DragEvent| {
                ev.prevent_default();
                on_drag_leave.run(column);
            }
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                on_drop.run(());
            }
            on:dragend=move |ev: DragEvent| {
                ev.prevent_default();
                on_drag_end.run(());
            }
        >
            <h2>
                {column.title(locale)}
                <span class="task-count">{move || count.get()}</span>
                {on_add.map(|on_add| view! {
                    <button
                        class="btn-primary add-card-btn"
                        disabled=move || add_disabled.get()
                        on:click=move |_| on_add.run(())
                    >
                        {add_label}
                    </button>
                })}
            </h2>
            <ul>{children()}</ul>
        </section>
    }
}

/// Placeholder shown while the stored board is being read.
#[component]
pub fn LoadingColumn() -> impl IntoView {
    let locale = use_context::<BoardConfig>().unwrap_or_default().locale;
    let title = match locale {
        Locale::En => "Loading…",
        Locale::Zh => "读取中",
    };

    view! {
        <section class="kanban-column column-loading">
            <h2>{title}</h2>
            <ul></ul>
        </section>
    }
}
