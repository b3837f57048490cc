use egui::{Color32, Pos2, Rect, Vec2};

use super::Region;
use crate::error::AnnotateResult;
use crate::shape::common;
use crate::surface::DrawingSurface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Pos2,
    radius: f32,
}

impl Circle {
    pub fn new(center: Pos2, radius: f32) -> AnnotateResult<Self> {
        common::validate_position(center.x, center.y)?;
        common::validate_extent("radius", radius)?;
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Region for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::splat(self.radius * 2.0))
    }

    fn contains(&self, pos: Pos2) -> bool {
        self.center.distance_sq(pos) <= self.radius * self.radius
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    fn paint(&self, surface: &mut dyn DrawingSurface, fill: Color32) {
        surface.fill_circle(self.center, self.radius, fill);
    }
}
