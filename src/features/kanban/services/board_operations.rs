use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::core::config::{BoardConfig, Locale};
use crate::core::console;
use crate::core::models::{BoardState, Card, DragContext};
use crate::core::services::{load_board, save_board, LoadGuard, LocalStorage};

/// Status line shown under the board header after a load or save.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardNotice {
    Saved(usize),
    SaveFailed(String),
    LoadFailed(String),
}

impl BoardNotice {
    pub fn is_error(&self) -> bool {
        !matches!(self, BoardNotice::Saved(_))
    }

    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (BoardNotice::Saved(count), Locale::En) => format!("Saved {} cards", count),
            (BoardNotice::SaveFailed(reason), Locale::En) => format!("Could not save the board: {}", reason),
            (BoardNotice::LoadFailed(reason), Locale::En) => {
                format!("Stored board could not be read, showing the sample board ({})", reason)
            }
            (BoardNotice::Saved(count), Locale::Zh) => format!("已保存 {} 张卡片", count),
            (BoardNotice::SaveFailed(reason), Locale::Zh) => format!("保存失败：{}", reason),
            (BoardNotice::LoadFailed(reason), Locale::Zh) => format!("无法读取已保存的看板，显示示例数据（{}）", reason),
        }
    }
}

/// Trims the raw input; blank titles are rejected.
pub fn normalize_title(raw: &str) -> Option<String> {
    let title = raw.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

// Load the stored board after the configured delay, unless the view went away
pub fn spawn_initial_load(
    config: BoardConfig,
    board: RwSignal<BoardState>,
    loading: RwSignal<bool>,
    notice: RwSignal<Option<BoardNotice>>,
    guard: LoadGuard,
) {
    spawn_local(async move {
        if config.load_delay_ms > 0 {
            TimeoutFuture::new(config.load_delay_ms).await;
        }
        if !guard.is_live() {
            return;
        }

        match load_board(&LocalStorage::new(config.storage_key.clone())) {
            Ok(Some(stored)) => {
                console::log(&format!("Loaded {} cards from '{}'", stored.card_count(), config.storage_key));
                board.set(stored);
            }
            Ok(None) => {
                console::log("No stored board, using sample data");
            }
            Err(e) => {
                console::error(&format!("Failed to load board: {}", e));
                notice.set(Some(BoardNotice::LoadFailed(e.to_string())));
            }
        }
        loading.set(false);
    });
}

// Prepend a new card to the to-do column; returns false if the title was rejected
pub fn add_card(raw_title: &str, board: RwSignal<BoardState>) -> bool {
    let Some(title) = normalize_title(raw_title) else {
        console::log("Ignoring card with an empty title");
        return false;
    };
    board.update(|state| state.add_card(Card::new(title)));
    true
}

// Resolve the in-flight drag against the board, then clear it; returns whether a card moved
pub fn drop_card(drag: RwSignal<DragContext>, board: RwSignal<BoardState>) -> bool {
    let context = drag.get_untracked();
    drag.update(|ctx| ctx.reset());

    let mut moved = false;
    board.update(|state| moved = state.apply_drop(&context));
    if moved {
        console::log(&format!(
            "Moved card {} to {}",
            context.card.as_deref().unwrap_or_default(),
            context.target.map(|c| c.key()).unwrap_or_default()
        ));
    } else if context.resolve().is_some() {
        console::error(&format!(
            "Card {} not found in its source column",
            context.card.as_deref().unwrap_or_default()
        ));
    }
    moved
}

// Write all three lists to local storage in one snapshot
pub fn save_board_snapshot(
    storage_key: &str,
    board: RwSignal<BoardState>,
    notice: RwSignal<Option<BoardNotice>>,
) {
    let result = board.with_untracked(|state| {
        save_board(&LocalStorage::new(storage_key), state).map(|_| state.card_count())
    });
    match result {
        Ok(count) => {
            console::log(&format!("Saved {} cards to '{}'", count, storage_key));
            notice.set(Some(BoardNotice::Saved(count)));
        }
        Err(e) => {
            console::error(&format!("Failed to save board: {}", e));
            notice.set(Some(BoardNotice::SaveFailed(e.to_string())));
        }
    }
}
