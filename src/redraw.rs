use std::cell::Cell;
use std::rc::Rc;

/// Result of asking the annotator to repaint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawOutcome {
    Drawn,
    /// Another redraw was already in progress
    Skipped,
}

/// Tracks whether a repaint is wanted and whether one is running.
///
/// Cloning yields another handle to the same flags, so a listener or the host
/// loop can observe or request repaints without borrowing the annotator.
#[derive(Debug, Clone, Default)]
pub struct RedrawScheduler {
    busy: Rc<Cell<bool>>,
    pending: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

/// Holds the busy flag for the duration of one redraw
#[derive(Debug)]
pub struct RedrawGuard {
    busy: Rc<Cell<bool>>,
}

impl Drop for RedrawGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.pending.set(true);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Claim the busy flag. `None` while another guard is alive.
    pub fn try_begin(&self) -> Option<RedrawGuard> {
        if self.busy.replace(true) {
            return None;
        }
        Some(RedrawGuard {
            busy: Rc::clone(&self.busy),
        })
    }

    pub fn mark_drawn(&self) {
        self.pending.set(false);
        self.frames.set(self.frames.get() + 1);
    }

    /// Number of completed redraws
    pub fn frames_drawn(&self) -> u64 {
        self.frames.get()
    }
}
