use super::column::{ColumnDragState, ColumnId};

/// What is being dragged and between which columns. Only meaningful between
/// a dragstart and the following drop or dragend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragContext {
    pub card: Option<String>,
    pub source: Option<ColumnId>,
    pub target: Option<ColumnId>,
}

/// A fully resolved move, produced when a drop lands on another column.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    pub card_id: String,
    pub from: ColumnId,
    pub to: ColumnId,
}

impl DragContext {
    pub fn start_card(&mut self, card_id: impl Into<String>) {
        self.card = Some(card_id.into());
    }

    pub fn set_source(&mut self, column: ColumnId) {
        self.source = Some(column);
    }

    pub fn enter(&mut self, column: ColumnId) {
        self.target = Some(column);
    }

    /// Leaving a column only clears the target if it was that column, so a
    /// late dragleave from the previous column cannot wipe the new target.
    pub fn leave(&mut self, column: ColumnId) {
        if self.target == Some(column) {
            self.target = None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.card.is_some() || self.source.is_some() || self.target.is_some()
    }

    /// None when any part is missing or the card would land where it started.
    pub fn resolve(&self) -> Option<MoveRequest> {
        let card_id = self.card.clone()?;
        let from = self.source?;
        let to = self.target?;
        if from == to {
            return None;
        }
        Some(MoveRequest { card_id, from, to })
    }

    pub fn column_state(&self, column: ColumnId) -> ColumnDragState {
        if self.target == Some(column) {
            ColumnDragState::Target
        } else if self.source == Some(column) {
            ColumnDragState::Source
        } else {
            ColumnDragState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging(card: &str, from: ColumnId) -> DragContext {
        let mut ctx = DragContext::default();
        ctx.start_card(card);
        ctx.set_source(from);
        ctx
    }

    #[test]
    fn resolves_a_move_between_columns() {
        let mut ctx = dragging("a", ColumnId::Todo);
        ctx.enter(ColumnId::Ongoing);
        assert_eq!(
            ctx.resolve(),
            Some(MoveRequest {
                card_id: "a".to_string(),
                from: ColumnId::Todo,
                to: ColumnId::Ongoing,
            })
        );
    }

    #[test]
    fn incomplete_or_same_column_drag_does_not_resolve() {
        assert_eq!(DragContext::default().resolve(), None);

        let no_target = dragging("a", ColumnId::Todo);
        assert_eq!(no_target.resolve(), None);

        let mut no_card = DragContext::default();
        no_card.set_source(ColumnId::Todo);
        no_card.enter(ColumnId::Done);
        assert_eq!(no_card.resolve(), None);

        let mut same = dragging("a", ColumnId::Done);
        same.enter(ColumnId::Done);
        assert_eq!(same.resolve(), None);
    }

    #[test]
    fn leave_only_clears_its_own_target() {
        let mut ctx = dragging("a", ColumnId::Todo);
        ctx.enter(ColumnId::Ongoing);
        ctx.enter(ColumnId::Done);
        ctx.leave(ColumnId::Ongoing);
        assert_eq!(ctx.target, Some(ColumnId::Done));
        ctx.leave(ColumnId::Done);
        assert_eq!(ctx.target, None);
    }

    #[test]
    fn column_states_follow_the_drag() {
        let mut ctx = dragging("a", ColumnId::Todo);
        assert_eq!(ctx.column_state(ColumnId::Todo), ColumnDragState::Source);
        assert_eq!(ctx.column_state(ColumnId::Done), ColumnDragState::Idle);

        ctx.enter(ColumnId::Done);
        assert_eq!(ctx.column_state(ColumnId::Done), ColumnDragState::Target);

        // Hovering the source column shows it as a target, never both
        ctx.enter(ColumnId::Todo);
        assert_eq!(ctx.column_state(ColumnId::Todo), ColumnDragState::Target);

        ctx.reset();
        assert!(!ctx.is_active());
        for column in ColumnId::all() {
            assert_eq!(ctx.column_state(column), ColumnDragState::Idle);
        }
    }
}
