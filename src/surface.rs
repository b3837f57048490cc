use egui::{Color32, Painter, Pos2, Rect, TextureId, Vec2};

/// A 2D raster target the annotator paints onto.
///
/// All coordinates passed to a surface are surface-local: (0, 0) is the
/// top-left corner of the surface, not of the screen.
pub trait DrawingSurface {
    /// Size of the drawable area
    fn size(&self) -> Vec2;

    /// Wipe everything drawn so far
    fn clear(&mut self);

    /// Draw an uploaded texture stretched over `rect`.
    /// `None` means the texture is not uploaded yet; surfaces draw a placeholder.
    fn draw_image(&mut self, texture: Option<TextureId>, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
}

/// Surface backed by an egui painter, clipped to the canvas area on screen
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas_rect: Rect,
    clear_color: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect, clear_color: Color32) -> Self {
        Self {
            painter,
            canvas_rect,
            clear_color,
        }
    }

    fn to_screen(&self, rect: Rect) -> Rect {
        rect.translate(self.canvas_rect.min.to_vec2())
    }
}

impl DrawingSurface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.canvas_rect.size()
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.canvas_rect, 0.0, self.clear_color);
    }

    fn draw_image(&mut self, texture: Option<TextureId>, rect: Rect) {
        let rect = self.to_screen(rect);
        match texture {
            Some(texture_id) => {
                self.painter.image(
                    texture_id,
                    rect,
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
            None => {
                self.painter.rect_filled(rect, 0.0, Color32::from_gray(200));
                self.painter
                    .rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Color32::from_gray(100)));
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter.rect_filled(self.to_screen(rect), 0.0, color);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let center = center + self.canvas_rect.min.to_vec2();
        self.painter.circle_filled(center, radius, color);
    }
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Image {
        texture: Option<TextureId>,
        rect: Rect,
    },
    Rect {
        rect: Rect,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
}

/// Headless surface that remembers what was drawn since the last clear.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Operations making up the current frame
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_blank(&self) -> bool {
        self.ops.is_empty()
    }

    /// Topmost fill color painted at `pos`, if any shape covers it
    pub fn color_at(&self, pos: Pos2) -> Option<Color32> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::Rect { rect, color } if rect.contains(pos) => Some(*color),
            DrawOp::Circle {
                center,
                radius,
                color,
            } if center.distance_sq(pos) <= radius * radius => Some(*color),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn draw_image(&mut self, texture: Option<TextureId>, rect: Rect) {
        self.ops.push(DrawOp::Image { texture, rect });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}
