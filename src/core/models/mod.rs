pub mod board;
pub mod card;
pub mod column;
pub mod drag;

pub use board::BoardState;
pub use card::Card;
pub use column::{ColumnDragState, ColumnId};
pub use drag::DragContext;
