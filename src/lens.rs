#![warn(missing_docs)]
//! Thin lens with its pair of focal lengths.
use crate::error::{LensimError, LsResult};

/// An ideal thin lens placed in the plane `x = 0`.
///
/// Distances are signed and expressed in focal-length units. The image-side
/// focal length is always the negation of the object-side focal length, so
/// only the latter is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensSystem {
    object_focal: f64,
}

impl LensSystem {
    /// Create a new [`LensSystem`] with the given object-side focal length.
    ///
    /// # Errors
    /// This function returns a [`LensimError::Setup`] if the focal length is
    /// zero or not finite.
    pub fn new(object_focal: f64) -> LsResult<Self> {
        if !object_focal.is_finite() || object_focal == 0.0 {
            return Err(LensimError::Setup(format!(
                "focal length must be finite and nonzero (got {object_focal})"
            )));
        }
        Ok(Self { object_focal })
    }
    /// Return the object-side focal length.
    #[must_use]
    pub const fn object_focal(&self) -> f64 {
        self.object_focal
    }
    /// Return the image-side focal length (the negated object-side focal
    /// length).
    #[must_use]
    pub fn image_focal(&self) -> f64 {
        -self.object_focal
    }
}

impl Default for LensSystem {
    /// Create a lens with an object-side focal length of -1.0 (focal point
    /// one unit in front of the lens plane).
    fn default() -> Self {
        Self { object_focal: -1.0 }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    #[test]
    fn default() {
        let lens = LensSystem::default();
        assert_relative_eq!(lens.object_focal(), -1.0);
        assert_relative_eq!(lens.image_focal(), 1.0);
    }
    #[test]
    fn new() {
        assert!(LensSystem::new(0.0).is_err());
        assert!(LensSystem::new(f64::NAN).is_err());
        assert!(LensSystem::new(f64::INFINITY).is_err());
        assert!(LensSystem::new(f64::NEG_INFINITY).is_err());
        let lens = LensSystem::new(-2.0).unwrap();
        assert_relative_eq!(lens.object_focal(), -2.0);
    }
    #[test]
    fn focal_lengths_are_negations() {
        for f in [-2.5, -1.0, 0.5, 3.0] {
            let lens = LensSystem::new(f).unwrap();
            assert_relative_eq!(lens.image_focal(), -lens.object_focal());
        }
    }
}
