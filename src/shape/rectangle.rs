use egui::{Color32, Pos2, Rect, Vec2};

use super::Region;
use crate::error::AnnotateResult;
use crate::shape::common;
use crate::surface::DrawingSurface;

/// Axis-aligned rectangle in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    rect: Rect,
}

impl Rectangle {
    pub fn new(min: Pos2, size: Vec2) -> AnnotateResult<Self> {
        common::validate_position(min.x, min.y)?;
        common::validate_extent("width", size.x)?;
        common::validate_extent("height", size.y)?;
        Ok(Self {
            rect: Rect::from_min_size(min, size),
        })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Region for Rectangle {
    fn kind(&self) -> &'static str {
        "rectangle"
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn contains(&self, pos: Pos2) -> bool {
        // Edges count as inside
        self.rect.contains(pos)
    }

    fn translate(&mut self, delta: Vec2) {
        self.rect = self.rect.translate(delta);
    }

    fn paint(&self, surface: &mut dyn DrawingSurface, fill: Color32) {
        surface.fill_rect(self.rect, fill);
    }
}
