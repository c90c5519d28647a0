use crate::core::config::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnId {
    Todo,
    Ongoing,
    Done,
}

impl ColumnId {
    pub fn all() -> [ColumnId; 3] {
        [ColumnId::Todo, ColumnId::Ongoing, ColumnId::Done]
    }

    /// Stable key, used for CSS classes.
    pub fn key(&self) -> &'static str {
        match self {
            ColumnId::Todo => "todo",
            ColumnId::Ongoing => "ongoing",
            ColumnId::Done => "done",
        }
    }

    pub fn title(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ColumnId::Todo, Locale::En) => "To Do",
            (ColumnId::Ongoing, Locale::En) => "Ongoing",
            (ColumnId::Done, Locale::En) => "Done",
            (ColumnId::Todo, Locale::Zh) => "待处理",
            (ColumnId::Ongoing, Locale::Zh) => "进行中",
            (ColumnId::Done, Locale::Zh) => "已完成",
        }
    }
}

/// Visual drag state of one column. A column is never source and target at
/// once; see `DragContext::column_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnDragState {
    #[default]
    Idle,
    Source,
    Target,
}

impl ColumnDragState {
    pub fn css_class(&self) -> &'static str {
        match self {
            ColumnDragState::Idle => "",
            ColumnDragState::Source => "drag-source",
            ColumnDragState::Target => "drag-target",
        }
    }
}
