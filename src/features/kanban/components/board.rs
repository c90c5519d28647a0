use leptos::prelude::*;

/// Lays the columns out side by side.
#[component]
pub fn KanbanBoard(children: Children) -> impl IntoView {
    view! { <div class="kanban-board">{children()}</div> }
}
