use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::core::models::{BoardState, ColumnId, DragContext};
use crate::core::services::LoadGuard;
use crate::features::kanban::services::{
    add_card, drop_card, save_board_snapshot, spawn_initial_load, BoardNotice,
};

pub struct BoardHook {
    pub board: ReadSignal<BoardState>,
    pub loading: ReadSignal<bool>,
    pub adding: ReadSignal<bool>,
    pub drag: ReadSignal<DragContext>,
    pub notice: ReadSignal<Option<BoardNotice>>,
    pub open_add_form: Callback<()>,
    pub submit_card: Callback<String>,
    pub start_card_drag: Callback<String>,
    pub drag_source: Callback<ColumnId>,
    pub drag_enter: Callback<ColumnId>,
    pub drag_leave: Callback<ColumnId>,
    pub drag_end: Callback<()>,
    pub drop_card: Callback<()>,
    pub save: Callback<()>,
}

pub fn use_board(config: BoardConfig) -> BoardHook {
    let board = RwSignal::new(BoardState::sample());
    let loading = RwSignal::new(true);
    let adding = RwSignal::new(false);
    let drag = RwSignal::new(DragContext::default());
    let notice = RwSignal::new(None::<BoardNotice>);

    // Load the stored board on mount; a teardown before it resolves cancels the write-back
    {
        let guard = LoadGuard::new();
        let cleanup_guard = guard.clone();
        on_cleanup(move || cleanup_guard.cancel());
        spawn_initial_load(config.clone(), board, loading, notice, guard);
    }

    let open_add_form = Callback::new(move |_: ()| adding.set(true));

    let submit_card = Callback::new(move |title: String| {
        if add_card(&title, board) {
            adding.set(false);
        }
    });

    let start_card_drag = Callback::new(move |card_id: String| {
        drag.update(|ctx| ctx.start_card(card_id));
    });

    let drag_source = Callback::new(move |column: ColumnId| {
        drag.update(|ctx| ctx.set_source(column));
    });

    // dragover fires continuously; only notify subscribers when the target changes
    let drag_enter = Callback::new(move |column: ColumnId| {
        if drag.with_untracked(|ctx| ctx.target != Some(column)) {
            drag.update(|ctx| ctx.enter(column));
        }
    });

    let drag_leave = Callback::new(move |column: ColumnId| {
        if drag.with_untracked(|ctx| ctx.target == Some(column)) {
            drag.update(|ctx| ctx.leave(column));
        }
    });

    let drag_end = Callback::new(move |_: ()| {
        if drag.with_untracked(|ctx| ctx.is_active()) {
            drag.update(|ctx| ctx.reset());
        }
    });

    let drop_handler = Callback::new(move |_: ()| {
        drop_card(drag, board);
    });

    let save = {
        let storage_key = config.storage_key.clone();
        Callback::new(move |_: ()| save_board_snapshot(&storage_key, board, notice))
    };

    BoardHook {
        board: board.read_only(),
        loading: loading.read_only(),
        adding: adding.read_only(),
        drag: drag.read_only(),
        notice: notice.read_only(),
        open_add_form,
        submit_card,
        start_card_drag,
        drag_source,
        drag_enter,
        drag_leave,
        drag_end,
        drop_card: drop_handler,
        save,
    }
}
