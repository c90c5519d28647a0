use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::card::{local_to_utc, Card};
use super::column::ColumnId;
use super::drag::{DragContext, MoveRequest};

/// All three column lists. This is also the persisted snapshot, so the
/// field names match the stored JSON keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub todo_list: Vec<Card>,
    pub ongoing_list: Vec<Card>,
    pub done_list: Vec<Card>,
}

impl BoardState {
    /// Starter board shown until a saved one is loaded.
    pub fn sample() -> Self {
        Self {
            todo_list: vec![
                sample_card("开发任务-1", 2022, 5, 22),
                sample_card("开发任务-3", 2022, 6, 22),
                sample_card("开发任务-5", 2022, 7, 22),
                sample_card("测试任务-3", 2022, 7, 23),
            ],
            ongoing_list: vec![
                sample_card("开发任务-4", 2022, 5, 22),
                sample_card("开发任务-6", 2022, 6, 22),
                sample_card("测试任务-2", 2022, 7, 22),
            ],
            done_list: vec![
                sample_card("开发任务-2", 2022, 6, 24),
                sample_card("测试任务-1", 2022, 7, 3),
            ],
        }
    }

    pub fn list(&self, column: ColumnId) -> &[Card] {
        match column {
            ColumnId::Todo => &self.todo_list,
            ColumnId::Ongoing => &self.ongoing_list,
            ColumnId::Done => &self.done_list,
        }
    }

    fn list_mut(&mut self, column: ColumnId) -> &mut Vec<Card> {
        match column {
            ColumnId::Todo => &mut self.todo_list,
            ColumnId::Ongoing => &mut self.ongoing_list,
            ColumnId::Done => &mut self.done_list,
        }
    }

    pub fn card_count(&self) -> usize {
        self.todo_list.len() + self.ongoing_list.len() + self.done_list.len()
    }

    /// New cards always land at the top of the to-do column.
    pub fn add_card(&mut self, card: Card) {
        self.todo_list.insert(0, card);
    }

    /// Removes the card from `from` by id and prepends it to `to`. Returns
    /// false and leaves the board untouched if the card is not in `from` or
    /// the columns are the same.
    pub fn move_card(&mut self, request: &MoveRequest) -> bool {
        if request.from == request.to {
            return false;
        }
        let source = self.list_mut(request.from);
        let Some(index) = source.iter().position(|c| c.id == request.card_id) else {
            return false;
        };
        let card = source.remove(index);
        self.list_mut(request.to).insert(0, card);
        true
    }

    pub fn apply_drop(&mut self, drag: &DragContext) -> bool {
        match drag.resolve() {
            Some(request) => self.move_card(&request),
            None => false,
        }
    }
}

fn sample_card(title: &str, year: i32, month: u32, day: u32) -> Card {
    let status = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(18, 15, 0))
        .map(local_to_utc)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    Card::created_at(title, status)
}
