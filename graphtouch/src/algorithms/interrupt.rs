use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Polled by the algorithms at outer-loop boundaries; a `true` answer aborts
/// the run with [`AlgorithmError::Cancelled`](crate::error::AlgorithmError).
pub trait Interrupt {
    fn interrupted(&self) -> bool;
}

/// Never interrupts.
impl Interrupt for () {
    fn interrupted(&self) -> bool {
        false
    }
}

impl Interrupt for AtomicBool {
    fn interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Shared cancellation flag handed to a background run.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Interrupt for CancelToken {
    fn interrupted(&self) -> bool {
        self.is_cancelled()
    }
}
