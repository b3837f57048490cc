#![warn(clippy::all, rust_2018_idioms)]

pub mod annotator;
pub mod app;
pub mod background;
pub mod config;
pub mod error;
pub mod event;
pub mod id_generator;
pub mod input;
pub mod redraw;
pub mod shape;
pub mod surface;

pub use annotator::Annotator;
pub use app::AnnotateApp;
pub use background::Background;
pub use config::{AnnotatorConfig, ShapeSpec};
pub use error::{AnnotateError, AnnotateResult};
pub use redraw::{RedrawOutcome, RedrawScheduler};
pub use shape::{Circle, ClickEvent, Rectangle, Region, Shape, ShapeKind};
pub use surface::{DrawOp, DrawingSurface, PainterSurface, RecordingSurface};
