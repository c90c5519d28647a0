pub mod board;
pub mod card;
pub mod column;
pub mod header;
pub mod new_card_form;

pub use board::KanbanBoard;
pub use card::KanbanCard;
pub use column::{KanbanColumn, LoadingColumn};
pub use header::KanbanHeader;
pub use new_card_form::NewCardForm;
