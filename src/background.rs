use std::path::Path;

use egui::{ColorImage, Context, Pos2, Rect, TextureHandle, TextureId, TextureOptions, Vec2};
use log::{debug, info};

use crate::error::{AnnotateError, AnnotateResult};

/// Scale that fits an image inside the surface while keeping its aspect ratio.
///
/// Returns `None` when either size is empty or not finite.
pub fn fit_scale(surface: Vec2, image: Vec2) -> Option<f32> {
    if !(surface.x > 0.0 && surface.y > 0.0 && image.x > 0.0 && image.y > 0.0) {
        return None;
    }
    let scale = (surface.x / image.x).min(surface.y / image.y);
    scale.is_finite().then_some(scale)
}

/// The decoded background image and its GPU texture, once uploaded
#[derive(Clone)]
pub struct Background {
    label: String,
    image: ColorImage,
    texture_handle: Option<TextureHandle>,
}

// Custom Debug implementation since TextureHandle doesn't implement Debug
impl std::fmt::Debug for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Background")
            .field("label", &self.label)
            .field("size", &self.image.size)
            .field("uploaded", &self.texture_handle.is_some())
            .finish()
    }
}

impl Background {
    pub fn from_color_image(image: ColorImage, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            image,
            texture_handle: None,
        }
    }

    /// Decode an encoded image (png, jpeg, ...) held in memory
    pub fn from_bytes(bytes: &[u8], label: impl Into<String>) -> AnnotateResult<Self> {
        let label = label.into();
        let decoded = image::load_from_memory(bytes).map_err(|error| AnnotateError::ImageLoad {
            origin: label.clone(),
            error,
        })?;
        debug!("Decoded image {}: {}x{}", label, decoded.width(), decoded.height());
        Ok(Self::from_dynamic(decoded, label))
    }

    /// Read and decode an image file
    pub fn load(path: &Path) -> AnnotateResult<Self> {
        let label = path.display().to_string();
        let decoded = image::open(path).map_err(|error| AnnotateError::ImageLoad {
            origin: label.clone(),
            error,
        })?;
        info!("🖼️ Loaded background {}: {}x{}", label, decoded.width(), decoded.height());
        Ok(Self::from_dynamic(decoded, label))
    }

    fn from_dynamic(decoded: image::DynamicImage, label: String) -> Self {
        let size = [decoded.width() as usize, decoded.height() as usize];
        let rgba = decoded.to_rgba8();
        let pixels = rgba.as_flat_samples();
        Self::from_color_image(ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()), label)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Natural size of the image in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.image.size[0] as f32, self.image.size[1] as f32)
    }

    /// Where the image lands on a surface of the given size: anchored at the
    /// top-left corner and scaled down (or up) to fit.
    pub fn placement(&self, surface: Vec2) -> Option<Rect> {
        let scale = fit_scale(surface, self.size())?;
        Some(Rect::from_min_size(Pos2::ZERO, self.size() * scale))
    }

    /// Upload the texture on first use and return its id
    pub fn ensure_texture(&mut self, ctx: &Context) -> TextureId {
        if let Some(handle) = &self.texture_handle {
            return handle.id();
        }
        let name = format!("background_{}", self.label);
        let handle = ctx.load_texture(name, self.image.clone(), TextureOptions::LINEAR);
        let id = handle.id();
        self.texture_handle = Some(handle);
        id
    }

    pub fn texture_id(&self) -> Option<TextureId> {
        self.texture_handle.as_ref().map(TextureHandle::id)
    }
}
