use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::core::models::{Card, ColumnId};
use crate::features::kanban::components::{
    KanbanBoard, KanbanCard, KanbanColumn, KanbanHeader, LoadingColumn, NewCardForm,
};
use crate::features::kanban::hooks::{use_board, BoardHook};

#[component]
pub fn Kanban() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let BoardHook {
        board,
        loading,
        adding,
        drag,
        notice,
        open_add_form,
        submit_card,
        start_card_drag,
        drag_source,
        drag_enter,
        drag_leave,
        drag_end,
        drop_card,
        save,
    } = use_board(config);

    let columns = move || {
        ColumnId::all()
            .into_iter()
            .map(|column| {
                let is_todo = column == ColumnId::Todo;
                view! {
                    <KanbanColumn
                        column=column
                        count=Signal::derive(move || board.with(|b| b.list(column).len()))
                        state=Signal::derive(move || drag.with(|d| d.column_state(column)))
                        on_add=is_todo.then_some(open_add_form)
                        add_disabled=Signal::derive(move || adding.get())
                        on_drag_source=drag_source
                        on_drag_enter=drag_enter
                        on_drag_leave=drag_leave
                        on_drop=drop_card
                        on_drag_end=drag_end
                    >
                        {is_todo.then(|| view! {
                            <Show when=move || adding.get()>
                                <NewCardForm on_submit=submit_card />
                            </Show>
                        })}
                        <For
                            each=move || board.with(|b| b.list(column).to_vec())
                            key=|card: &Card| card.id.clone()
                            children=move |card| view! {
                                <KanbanCard card=card on_drag_start=start_card_drag />
                            }
                        />
                    </KanbanColumn>
                }
            })
            .collect_view()
    };

    view! {
        <div class="kanban-page">
            <KanbanHeader on_save=save notice=notice />
            <KanbanBoard>
                {move || {
                    if loading.get() {
                        view! { <LoadingColumn /> }.into_any()
                    } else {
                        columns().into_any()
                    }
                }}
            </KanbanBoard>
        </div>
    }
}
