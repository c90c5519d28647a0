use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Liveness flag shared between a view and the async work it spawned.
/// The view cancels it on cleanup; the task checks it before writing back.
#[derive(Debug, Clone)]
pub struct LoadGuard {
    live: Arc<AtomicBool>,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)) }
    }

    pub fn cancel(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

impl Default for LoadGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_seen_by_every_clone() {
        let guard = LoadGuard::new();
        let task_side = guard.clone();
        assert!(task_side.is_live());
        guard.cancel();
        assert!(!task_side.is_live());
    }
}
