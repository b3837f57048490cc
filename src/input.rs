use egui::{Pos2, Rect, Response};

/// Converts pointer input on screen into surface-local clicks.
///
/// Whether a click is acted on is decided by the annotator, see
/// [`crate::Annotator::detach`].
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Screen position to surface-local position; `None` outside the canvas
    pub fn to_surface(&self, screen_pos: Pos2) -> Option<Pos2> {
        if !self.canvas_rect.contains(screen_pos) {
            return None;
        }
        Some(screen_pos - self.canvas_rect.min.to_vec2())
    }

    /// The surface-local position of a primary click on the canvas this frame
    pub fn take_click(&self, response: &Response) -> Option<Pos2> {
        if !response.clicked() {
            return None;
        }
        response
            .interact_pointer_pos()
            .and_then(|pos| self.to_surface(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_to_surface_offsets_by_canvas_origin() {
        let handler = InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 200.0)));
        assert_eq!(handler.to_surface(pos2(110.0, 60.0)), Some(pos2(10.0, 10.0)));
        assert_eq!(handler.to_surface(pos2(10.0, 60.0)), None);
    }

    #[test]
    fn test_canvas_edges_map_to_surface_bounds() {
        let mut handler = InputHandler::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0)));
        handler.set_canvas_rect(Rect::from_min_size(pos2(40.0, 40.0), vec2(100.0, 80.0)));
        assert_eq!(handler.to_surface(pos2(40.0, 40.0)), Some(pos2(0.0, 0.0)));
        assert_eq!(handler.to_surface(pos2(140.0, 120.0)), Some(pos2(100.0, 80.0)));
        assert_eq!(handler.to_surface(pos2(141.0, 120.0)), None);
    }
}
