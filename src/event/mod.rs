mod bus;
mod events;

pub use bus::EventBus;
pub use events::AnnotateEvent;

pub trait EventHandler {
    fn handle_event(&mut self, event: &AnnotateEvent);
}

/// Writes every event to the log
#[derive(Debug, Default)]
pub struct LoggingHandler;

impl EventHandler for LoggingHandler {
    fn handle_event(&mut self, event: &AnnotateEvent) {
        match event {
            AnnotateEvent::Clicked { position, hits } => {
                log::info!("Click at ({:.1}, {:.1}) hit {:?}", position.x, position.y, hits);
            }
            AnnotateEvent::RedrawSkipped => log::debug!("Redraw skipped: already in progress"),
            other => log::trace!("{:?}", other),
        }
    }
}
