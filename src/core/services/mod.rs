pub mod load_guard;
pub mod relative_time;
pub mod storage;

pub use load_guard::LoadGuard;
pub use relative_time::relative_time;
pub use storage::*;
