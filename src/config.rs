use std::path::{Path, PathBuf};

use egui::{Color32, pos2, vec2};
use serde::{Deserialize, Serialize};

use crate::error::{AnnotateError, AnnotateResult};
use crate::shape::{Circle, Rectangle, ShapeKind};

/// A shape as written in the config file, in surface-local coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    Rectangle {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
    },
}

impl ShapeSpec {
    pub fn to_kind(&self) -> AnnotateResult<ShapeKind> {
        match *self {
            ShapeSpec::Rectangle {
                x,
                y,
                width,
                height,
            } => Ok(Rectangle::new(pos2(x, y), vec2(width, height))?.into()),
            ShapeSpec::Circle { x, y, radius } => Ok(Circle::new(pos2(x, y), radius)?.into()),
        }
    }
}

/// Everything the annotator needs to start.
///
/// Colors are stored as unmultiplied RGBA bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct AnnotatorConfig {
    pub image_path: Option<PathBuf>,
    pub surface_width: f32,
    pub surface_height: f32,
    pub clear_color: [u8; 4],
    pub default_color: [u8; 4],
    pub hit_color: [u8; 4],
    pub shapes: Vec<ShapeSpec>,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            image_path: Some(PathBuf::from("imgs/1.jpg")),
            surface_width: 800.0,
            surface_height: 600.0,
            clear_color: [0, 0, 0, 0],
            default_color: [0, 0, 255, 128],
            hit_color: [255, 0, 0, 128],
            shapes: vec![
                ShapeSpec::Rectangle {
                    x: 50.0,
                    y: 50.0,
                    width: 150.0,
                    height: 100.0,
                },
                ShapeSpec::Rectangle {
                    x: 260.0,
                    y: 80.0,
                    width: 120.0,
                    height: 160.0,
                },
                ShapeSpec::Circle {
                    x: 520.0,
                    y: 220.0,
                    radius: 70.0,
                },
            ],
        }
    }
}

fn to_color([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

impl AnnotatorConfig {
    pub fn from_json(json: &str) -> AnnotateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> AnnotateResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|error| AnnotateError::ConfigIo {
            path: path.to_path_buf(),
            error,
        })?;
        Self::from_json(&json)
    }

    pub fn clear_color(&self) -> Color32 {
        to_color(self.clear_color)
    }

    pub fn default_color(&self) -> Color32 {
        to_color(self.default_color)
    }

    pub fn hit_color(&self) -> Color32 {
        to_color(self.hit_color)
    }
}
