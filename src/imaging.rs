#![warn(missing_docs)]
//! Paraxial imaging through a thin lens.
//!
//! The object is modeled as a vertical arrow of fixed height standing on the
//! optical axis. Its image is always derived from the current object state
//! and the lens focal lengths and is never mutated independently.
use crate::error::{LensimError, LsResult};
use approx::relative_eq;

/// Default object height in focal-length units.
pub const DEFAULT_OBJECT_HEIGHT: f64 = 0.3;

/// Signed position and height of the object arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectState {
    distance: f64,
    height: f64,
}

impl ObjectState {
    /// Create a new [`ObjectState`].
    ///
    /// # Errors
    /// This function returns a [`LensimError::Setup`] if distance or height
    /// are not finite.
    pub fn new(distance: f64, height: f64) -> LsResult<Self> {
        if !distance.is_finite() || !height.is_finite() {
            return Err(LensimError::Setup(format!(
                "object distance and height must be finite (got {distance}, {height})"
            )));
        }
        Ok(Self { distance, height })
    }
    /// Return the signed object distance.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
    /// Return the object height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

/// Signed position and height of the image arrow, derived from an
/// [`ObjectState`] by [`compute_image_position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageState {
    distance: f64,
    height: f64,
}

impl ImageState {
    /// Return the signed image distance.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
    /// Return the image height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
    /// Return the lateral magnification with respect to the given object.
    #[must_use]
    pub fn magnification(&self, object: &ObjectState) -> f64 {
        self.height / object.height()
    }
}

/// Calculate the image position and height for a thin lens.
///
/// Uses the thin-lens equation `1/s' - 1/s = 1/f'` together with the
/// magnification relation `y'/y = s'/s`.
///
/// # Errors
/// This function returns a [`LensimError::Imaging`] for the degenerate
/// configurations without a finite image: the object in the lens plane
/// (`s == 0`) or the object in the focal plane (`s == -f'`, image at
/// infinity). Non-finite inputs yield a [`LensimError::Setup`].
pub fn compute_image_position(
    object_distance: f64,
    object_height: f64,
    image_focal: f64,
) -> LsResult<ImageState> {
    if !object_distance.is_finite() || !object_height.is_finite() || !image_focal.is_finite() {
        return Err(LensimError::Setup(
            "imaging inputs must be finite".into(),
        ));
    }
    if object_distance == 0.0 {
        return Err(LensimError::Imaging(
            "object lies in the lens plane, no image is formed".into(),
        ));
    }
    if relative_eq!(object_distance, -image_focal) {
        return Err(LensimError::Imaging(format!(
            "object in the focal plane (s = {object_distance}), image at infinity"
        )));
    }
    let image_distance = 1.0 / (1.0 / object_distance + 1.0 / image_focal);
    let image_height = image_distance * object_height / object_distance;
    Ok(ImageState {
        distance: image_distance,
        height: image_height,
    })
}
