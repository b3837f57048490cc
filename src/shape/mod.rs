use egui::{Color32, Pos2, Rect, Vec2};

mod circle;
mod common;
mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

use crate::id_generator;
use crate::surface::DrawingSurface;

/// Common trait for every geometric region a shape can occupy
pub trait Region {
    /// Get the region type as a string
    fn kind(&self) -> &'static str;

    /// Get the axis-aligned bounding rectangle
    fn bounds(&self) -> Rect;

    /// Test if the region contains the given surface-local position
    fn contains(&self, pos: Pos2) -> bool;

    /// Translate the region by the given delta
    fn translate(&mut self, delta: Vec2);

    /// Paint the region onto the surface with the given fill
    fn paint(&self, surface: &mut dyn DrawingSurface, fill: Color32);
}

/// Enumeration of all supported regions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Region for ShapeKind {
    fn kind(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle(r) => r.kind(),
            ShapeKind::Circle(c) => c.kind(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            ShapeKind::Rectangle(r) => r.bounds(),
            ShapeKind::Circle(c) => c.bounds(),
        }
    }

    fn contains(&self, pos: Pos2) -> bool {
        match self {
            ShapeKind::Rectangle(r) => r.contains(pos),
            ShapeKind::Circle(c) => c.contains(pos),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            ShapeKind::Rectangle(r) => r.translate(delta),
            ShapeKind::Circle(c) => c.translate(delta),
        }
    }

    fn paint(&self, surface: &mut dyn DrawingSurface, fill: Color32) {
        match self {
            ShapeKind::Rectangle(r) => r.paint(surface, fill),
            ShapeKind::Circle(c) => c.paint(surface, fill),
        }
    }
}

impl From<Rectangle> for ShapeKind {
    fn from(rect: Rectangle) -> Self {
        ShapeKind::Rectangle(rect)
    }
}

impl From<Circle> for ShapeKind {
    fn from(circle: Circle) -> Self {
        ShapeKind::Circle(circle)
    }
}

/// Passed to click listeners when a click lands inside a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub shape_id: usize,
    /// Surface-local click position
    pub position: Pos2,
}

/// Click callback. The second argument is the shape's fill, which the
/// listener may overwrite.
pub type ClickListener = Box<dyn FnMut(&ClickEvent, &mut Color32)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// An interactive shape: a region, a fill color and its click listeners
pub struct Shape {
    id: usize,
    kind: ShapeKind,
    fill: Color32,
    default_fill: Color32,
    listeners: Vec<(ListenerId, ClickListener)>,
}

// Custom Debug implementation since listeners are closures
impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("fill", &self.fill)
            .field("default_fill", &self.default_fill)
            .field("listeners", &format!("<{} listeners>", self.listeners.len()))
            .finish()
    }
}

impl Shape {
    pub fn new(kind: impl Into<ShapeKind>, default_fill: Color32) -> Self {
        Self {
            id: id_generator::generate_id(),
            kind: kind.into(),
            fill: default_fill,
            default_fill,
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ShapeKind {
        &mut self.kind
    }

    pub fn fill(&self) -> Color32 {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Color32) {
        self.fill = fill;
    }

    pub fn default_fill(&self) -> Color32 {
        self.default_fill
    }

    pub fn set_default_fill(&mut self, fill: Color32) {
        self.default_fill = fill;
    }

    /// Restore the fill to the default color
    pub fn reset_fill(&mut self) {
        self.fill = self.default_fill;
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.kind.contains(pos)
    }

    pub fn bounds(&self) -> Rect {
        self.kind.bounds()
    }

    pub fn draw(&self, surface: &mut dyn DrawingSurface) {
        self.kind.paint(surface, self.fill);
    }

    pub fn add_click_listener(&mut self, listener: ClickListener) -> ListenerId {
        let id = ListenerId(id_generator::generate_listener_id());
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if no listener with that id was attached
    pub fn remove_click_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Run every listener, in the order they were added, for a click at `position`.
    ///
    /// Does not check containment; the caller decides which shapes were hit.
    pub fn dispatch_click(&mut self, position: Pos2) -> ClickEvent {
        let event = ClickEvent {
            shape_id: self.id,
            position,
        };
        for (_, listener) in &mut self.listeners {
            listener(&event, &mut self.fill);
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn test_rect() -> Shape {
        let rect = Rectangle::new(pos2(0.0, 0.0), vec2(10.0, 10.0)).unwrap();
        Shape::new(rect, Color32::BLUE)
    }

    #[test]
    fn test_listeners_run_in_insertion_order() {
        let mut shape = test_rect();
        let calls = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let calls = Rc::clone(&calls);
            shape.add_click_listener(Box::new(move |_, _| calls.borrow_mut().push(tag)));
        }

        shape.dispatch_click(pos2(5.0, 5.0));
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_listener_can_change_fill() {
        let mut shape = test_rect();
        shape.add_click_listener(Box::new(|_, fill| *fill = Color32::RED));

        let event = shape.dispatch_click(pos2(1.0, 1.0));
        assert_eq!(event.shape_id, shape.id());
        assert_eq!(shape.fill(), Color32::RED);

        shape.reset_fill();
        assert_eq!(shape.fill(), Color32::BLUE);
    }

    #[test]
    fn test_remove_listener() {
        let mut shape = test_rect();
        let id = shape.add_click_listener(Box::new(|_, fill| *fill = Color32::RED));
        assert_eq!(shape.listener_count(), 1);

        assert!(shape.remove_click_listener(id));
        assert!(!shape.remove_click_listener(id));

        shape.dispatch_click(pos2(1.0, 1.0));
        assert_eq!(shape.fill(), Color32::BLUE);
    }

    #[test]
    fn test_kind_delegates() {
        let circle: ShapeKind = Circle::new(pos2(0.0, 0.0), 5.0).unwrap().into();
        assert_eq!(circle.kind(), "circle");
        assert!(circle.contains(pos2(3.0, 4.0)));
        assert!(!circle.contains(pos2(4.0, 4.0)));
    }
}
