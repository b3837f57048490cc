use egui::{Color32, Context, Pos2, Vec2};
use log::{debug, info};

use crate::background::Background;
use crate::config::{AnnotatorConfig, ShapeSpec};
use crate::error::{AnnotateError, AnnotateResult};
use crate::event::{AnnotateEvent, EventBus};
use crate::redraw::{RedrawOutcome, RedrawScheduler};
use crate::shape::Shape;
use crate::surface::DrawingSurface;

fn validate_surface_size(size: Vec2) -> AnnotateResult<()> {
    if size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(AnnotateError::SurfaceUnavailable(format!(
            "surface has no drawable area: {}x{}",
            size.x, size.y
        )))
    }
}

/// Owns the background image and the interactive shapes, routes clicks to
/// them and repaints everything onto a [`DrawingSurface`].
#[derive(Debug)]
pub struct Annotator {
    config: AnnotatorConfig,
    surface_size: Vec2,
    background: Option<Background>,
    shapes: Vec<Shape>,
    scheduler: RedrawScheduler,
    event_bus: EventBus,
    attached: bool,
}

impl Annotator {
    /// Build the annotator and its configured shapes.
    ///
    /// Does not load the background image; call [`Annotator::load_background`].
    pub fn new(config: AnnotatorConfig) -> AnnotateResult<Self> {
        let surface_size = Vec2::new(config.surface_width, config.surface_height);
        validate_surface_size(surface_size)?;

        let mut annotator = Self {
            config,
            surface_size,
            background: None,
            shapes: Vec::new(),
            scheduler: RedrawScheduler::new(),
            event_bus: EventBus::new(),
            attached: true,
        };

        let default_color = annotator.config.default_color();
        let hit_color = annotator.config.hit_color();
        let kinds = annotator
            .config
            .shapes
            .iter()
            .map(ShapeSpec::to_kind)
            .collect::<AnnotateResult<Vec<_>>>()?;
        for kind in kinds {
            let mut shape = Shape::new(kind, default_color);
            shape.add_click_listener(highlight_listener(hit_color));
            annotator.add_shape(shape);
        }

        info!(
            "Annotator ready: {}x{} surface, {} shapes",
            surface_size.x,
            surface_size.y,
            annotator.shapes.len()
        );
        Ok(annotator)
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Load the configured background image. No retry on failure.
    pub fn load_background(&mut self) -> AnnotateResult<()> {
        let Some(path) = self.config.image_path.clone() else {
            debug!("No background image configured");
            return Ok(());
        };
        let background = Background::load(&path)?;
        self.set_background(background);
        Ok(())
    }

    pub fn set_background(&mut self, background: Background) {
        let size = background.size();
        self.event_bus.emit(AnnotateEvent::BackgroundLoaded {
            width: size.x as usize,
            height: size.y as usize,
        });
        self.background = Some(background);
        self.scheduler.request();
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn add_shape(&mut self, shape: Shape) -> usize {
        let id = shape.id();
        self.shapes.push(shape);
        self.scheduler.request();
        id
    }

    pub fn remove_shape(&mut self, id: usize) -> Option<Shape> {
        let index = self.shapes.iter().position(|shape| shape.id() == id)?;
        self.scheduler.request();
        Some(self.shapes.remove(index))
    }

    pub fn shape(&self, id: usize) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn shape_mut(&mut self, id: usize) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    /// Shapes in paint order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Ids of every shape containing `pos`, in paint order
    pub fn shapes_at(&self, pos: Pos2) -> Vec<usize> {
        self.shapes
            .iter()
            .filter(|shape| shape.contains(pos))
            .map(Shape::id)
            .collect()
    }

    /// Dispatch a click at a surface-local position.
    ///
    /// Every shape containing the point runs its listeners; every other shape
    /// goes back to its default fill. Returns the ids of the shapes hit.
    pub fn handle_click(&mut self, position: Pos2) -> Vec<usize> {
        if !self.attached {
            debug!("Click ignored: handler detached");
            return Vec::new();
        }

        let mut hits = Vec::new();
        for shape in &mut self.shapes {
            if shape.contains(position) {
                shape.dispatch_click(position);
                hits.push(shape.id());
            } else {
                shape.reset_fill();
            }
        }

        self.scheduler.request();
        self.event_bus.emit(AnnotateEvent::Clicked {
            position,
            hits: hits.clone(),
        });
        hits
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop reacting to clicks until [`Annotator::attach`] is called again
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    /// Track a new surface size. Degenerate sizes are ignored and the last
    /// usable size is kept for background placement.
    pub fn resize_surface(&mut self, size: Vec2) {
        if size == self.surface_size {
            return;
        }
        if let Err(err) = validate_surface_size(size) {
            debug!("Ignoring resize: {}", err);
            return;
        }
        self.surface_size = size;
        self.scheduler.request();
    }

    /// Upload GPU resources needed by the next redraw
    pub fn prepare(&mut self, ctx: &Context) {
        if let Some(background) = &mut self.background {
            if background.texture_id().is_none() {
                background.ensure_texture(ctx);
                self.scheduler.request();
            }
        }
    }

    /// Repaint the background and every shape.
    ///
    /// Returns [`RedrawOutcome::Skipped`] without touching the surface when a
    /// redraw is already running.
    pub fn redraw(&mut self, surface: &mut dyn DrawingSurface) -> RedrawOutcome {
        let Some(_guard) = self.scheduler.try_begin() else {
            self.event_bus.emit(AnnotateEvent::RedrawSkipped);
            return RedrawOutcome::Skipped;
        };

        // The surface may have been resized by the host since the last frame
        self.resize_surface(surface.size());
        surface.clear();

        if let Some(background) = &self.background {
            if let Some(rect) = background.placement(self.surface_size) {
                surface.draw_image(background.texture_id(), rect);
            }
        }

        for shape in &self.shapes {
            shape.draw(surface);
        }

        self.scheduler.mark_drawn();
        self.event_bus.emit(AnnotateEvent::Redrawn {
            shapes: self.shapes.len(),
        });
        RedrawOutcome::Drawn
    }

    pub fn needs_redraw(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn scheduler(&self) -> &RedrawScheduler {
        &self.scheduler
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}

/// Listener that paints the shape with `hit_color` when clicked
pub fn highlight_listener(hit_color: Color32) -> crate::shape::ClickListener {
    Box::new(move |_, fill| *fill = hit_color)
}
