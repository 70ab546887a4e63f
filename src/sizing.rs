//! Aspect-ratio validation and proportional target sizing.

use crate::{Result, TextGraphError};

/// Long side over short side.
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    let (long, short) = if width > height { (width, height) } else { (height, width) };
    long as f64 / short as f64
}

/// Reject images whose aspect ratio exceeds `max_ratio`. A non-positive limit disables the check.
pub fn check_ratio(width: u32, height: u32, max_ratio: f64) -> Result<()> {
    if max_ratio > 0.0 {
        let ratio = aspect_ratio(width, height);
        if ratio > max_ratio {
            return Err(TextGraphError::BadImageSize { ratio, max_ratio });
        }
    }
    Ok(())
}

/// How many times `dim` must shrink to fit within `max_dim` (0 = unconstrained).
pub fn divider(dim: u32, max_dim: u32) -> f64 {
    if max_dim == 0 || dim <= max_dim {
        1.0
    } else {
        dim as f64 / max_dim as f64
    }
}

/// Scale `(width, height)` by a single factor so neither side exceeds its maximum.
///
/// Dimensions that would floor to zero are raised to one.
pub fn target_size(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let divider = divider(width, max_width).max(divider(height, max_height));
    let new_width = (width as f64 / divider) as u32;
    let new_height = (height as f64 / divider) as u32;
    if new_width == 0 || new_height == 0 {
        log::warn!(
            "{}x{} scaled by {:.3} collapses to {}x{}, keeping at least one cell",
            width, height, divider, new_width, new_height
        );
    }
    (new_width.max(1), new_height.max(1))
}
