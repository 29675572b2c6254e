//! Cancellation for self-rescheduling loops and timers.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag checked by a loop before every step. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Returned by a loop step to decide whether it is scheduled again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

impl LoopControl {
    #[inline]
    pub fn continue_if(cond: bool) -> Self {
        if cond {
            LoopControl::Continue
        } else {
            LoopControl::Stop
        }
    }
}
