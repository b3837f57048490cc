use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all shapes
static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(1);

// Listener ids only need to be unique per process
static NEXT_LISTENER_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> usize {
    NEXT_SHAPE_ID.fetch_add(1, Ordering::SeqCst)
}

pub fn generate_listener_id() -> usize {
    NEXT_LISTENER_ID.fetch_add(1, Ordering::SeqCst)
}
