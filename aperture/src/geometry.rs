//! Geometric model for full-frame equivalent apertures.
//!
//! A camera is described by the *effective* sensor area it actually reads
//! out and the focal length its lens natively delivers. Cropping further
//! into that area (or zooming to a longer focal length) shrinks the
//! sensor diagonal as seen at the target focal length:
//!
//! - **Effective diagonal**: d = √(w² + h²)
//! - **Zoom factor**: z = f_target / f_native
//! - **Crop factor**: c = d_ff / (d / z), with d_ff the 36×24 mm diagonal
//! - **Equivalent aperture**: N_eq = N · c
//!
//! The equivalent aperture is the f-number a full-frame camera would need
//! to match the light gathering and depth of field of the cropped system.
//!
//! # Examples
//!
//! ```rust
//! use aperture::geometry::{crop_factor, equivalent_aperture};
//!
//! // 1/1.3" class sensor behind a 14mm lens, cropped to 28mm
//! let crop = crop_factor(6.4, 4.8, 14.0, 28.0);
//! let f_eq = equivalent_aperture(2.2, crop);
//! println!("f/{f_eq:.1} full-frame equivalent");
//! ```

/// Width of the full-frame reference format in millimeters
pub const FULL_FRAME_WIDTH_MM: f64 = 36.0;

/// Height of the full-frame reference format in millimeters
pub const FULL_FRAME_HEIGHT_MM: f64 = 24.0;

/// Diagonal of a sensor with the given dimensions (same unit in and out)
pub fn sensor_diagonal(width: f64, height: f64) -> f64 {
    (width.powi(2) + height.powi(2)).sqrt()
}

/// Diagonal of the 36mm × 24mm full-frame reference (≈43.2666 mm)
pub fn full_frame_diagonal_mm() -> f64 {
    sensor_diagonal(FULL_FRAME_WIDTH_MM, FULL_FRAME_HEIGHT_MM)
}

/// Calculate the crop factor of an effective sensor area at a target focal length
///
/// # Arguments
/// * `effective_width_mm` - Width of the sensor area actually used
/// * `effective_height_mm` - Height of the sensor area actually used
/// * `native_focal_length_mm` - Focal length the lens delivers without cropping (must be nonzero)
/// * `target_focal_length_mm` - Focal length being emulated by cropping
///
/// # Returns
/// Ratio of the full-frame diagonal to the effective diagonal seen at the target focal length
pub fn crop_factor(
    effective_width_mm: f64,
    effective_height_mm: f64,
    native_focal_length_mm: f64,
    target_focal_length_mm: f64,
) -> f64 {
    let effective_diagonal_mm = sensor_diagonal(effective_width_mm, effective_height_mm);
    let zoom_factor = target_focal_length_mm / native_focal_length_mm;
    let cropped_diagonal_mm = effective_diagonal_mm / zoom_factor;
    full_frame_diagonal_mm() / cropped_diagonal_mm
}

/// Scale a native f-number by a crop factor
pub fn equivalent_aperture(native_aperture: f64, crop_factor: f64) -> f64 {
    native_aperture * crop_factor
}
