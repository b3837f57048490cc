use std::cell::RefCell;
use crate::event::{AnnotateEvent, EventHandler};

/// Fans annotator events (clicks, redraws, background loads) out to observers.
///
/// Handlers run synchronously, in subscription order, on the emitting thread.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handler_count", &self.handler_count())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Register an observer; it sees every event emitted from now on
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Deliver `event` to every observer.
    ///
    /// Emitting on the same bus from inside `handle_event` panics (the handler
    /// list is already borrowed).
    pub fn emit(&self, event: AnnotateEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}
