#![warn(missing_docs)]
//! Affine line construction used for drawing rays.
use crate::error::{LensimError, LsResult};
use nalgebra::{Matrix2, Point2, Vector2};

/// An x interval `[start, end]` over which a line is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Create a new drawing interval.
    ///
    /// # Errors
    /// This function returns a [`LensimError::Geometry`] if the bounds are
    /// not finite or `start > end`.
    pub fn new(start: f64, end: f64) -> LsResult<Self> {
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(LensimError::Geometry(format!(
                "invalid drawing interval [{start}, {end}]"
            )));
        }
        Ok(Self { start, end })
    }
    /// Return the lower bound.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }
    /// Return the upper bound.
    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }
}

/// An affine function `y = slope * x + offset` fitted through one or two
/// reference points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineLine {
    slope: f64,
    offset: f64,
}

impl AffineLine {
    /// Fit the unique affine line through the given reference points.
    ///
    /// A single point yields the horizontal line at that point's height. Two
    /// points yield the interpolating line obtained by solving the 2x2
    /// linear system `[[x1, 1], [x2, 1]] * [a, b] = [y1, y2]`, which may be
    /// extrapolated beyond the points.
    ///
    /// # Errors
    /// This function returns a [`LensimError::Geometry`] if no or more than
    /// two points are given (ambiguous line) or if both points share the
    /// same x coordinate (singular system).
    pub fn through(points: &[Point2<f64>]) -> LsResult<Self> {
        match points {
            [point] => Ok(Self {
                slope: 0.0,
                offset: point.y,
            }),
            [first, second] => {
                let coefficients = Matrix2::new(first.x, 1.0, second.x, 1.0);
                let rhs = Vector2::new(first.y, second.y);
                let solution = coefficients.lu().solve(&rhs).ok_or_else(|| {
                    LensimError::Geometry(format!(
                        "no unique line through x = {} and x = {}",
                        first.x, second.x
                    ))
                })?;
                Ok(Self {
                    slope: solution[0],
                    offset: solution[1],
                })
            }
            _ => Err(LensimError::Geometry(format!(
                "a line needs one or two reference points (got {})",
                points.len()
            ))),
        }
    }
    /// Evaluate the line at the given x coordinate.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.offset
    }
    /// Return the slope of the line.
    #[must_use]
    pub const fn slope(&self) -> f64 {
        self.slope
    }
}
