use crate::error::{AnnotateError, AnnotateResult};

/// Validates a single extent (width, height or radius)
pub(crate) fn validate_extent(name: &str, value: f32) -> AnnotateResult<()> {
    if !value.is_finite() {
        return Err(AnnotateError::InvalidShape(format!(
            "{} is not finite: {}",
            name, value
        )));
    }
    if value <= 0.0 {
        return Err(AnnotateError::InvalidShape(format!(
            "{} must be positive: {}",
            name, value
        )));
    }
    Ok(())
}

pub(crate) fn validate_position(x: f32, y: f32) -> AnnotateResult<()> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(AnnotateError::InvalidShape(format!(
            "Position is not finite: ({}, {})",
            x, y
        )))
    }
}
