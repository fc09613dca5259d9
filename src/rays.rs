#![warn(missing_docs)]
//! Construction of the three canonical thin-lens rays.
//!
//! Each ray is split into straight segments: the solid incidence-side
//! segment, the solid transmitted segment on the far side of the lens and
//! (where applicable) a dashed virtual extension obtained by backward
//! extrapolation. The segment styles carry physical meaning (real vs.
//! virtual light path), so the point lists and intervals below mirror the
//! sign of the object distance and must not be reordered.
use crate::{
    error::LsResult,
    geometry::{AffineLine, Interval},
    imaging::ObjectState,
    lens::LensSystem,
};
use nalgebra::Point2;

/// Physical role of a single ray segment, determining its drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayStyle {
    /// real segment on the object's incidence side (solid, with point markers)
    Incidence,
    /// real transmitted segment behind the lens (solid)
    Transmitted,
    /// virtual backward extrapolation (dashed)
    Virtual,
}

/// A straight ray segment spanning a drawing interval.
///
/// Created fresh on every redraw and discarded with the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    line: AffineLine,
    interval: Interval,
    style: RayStyle,
}

impl RaySegment {
    /// Construct a segment over the given interval from one or two reference
    /// points (see [`AffineLine::through`]).
    ///
    /// # Errors
    /// This function propagates the [`AffineLine::through`] errors for an
    /// invalid number of points or a singular point pair.
    pub fn from_points(
        interval: Interval,
        points: &[Point2<f64>],
        style: RayStyle,
    ) -> LsResult<Self> {
        let line = AffineLine::through(points)?;
        Ok(Self {
            line,
            interval,
            style,
        })
    }
    /// Return the segment endpoint at the interval's lower bound.
    #[must_use]
    pub fn start_point(&self) -> (f64, f64) {
        (self.interval.start(), self.line.y_at(self.interval.start()))
    }
    /// Return the segment endpoint at the interval's upper bound.
    #[must_use]
    pub fn end_point(&self) -> (f64, f64) {
        (self.interval.end(), self.line.y_at(self.interval.end()))
    }
    /// Return the height of the ray at the interval's upper bound. Callers
    /// chain rays with this value (e.g. the exit height in the lens plane
    /// becomes the reference height of the following horizontal segment).
    #[must_use]
    pub fn end_height(&self) -> f64 {
        self.line.y_at(self.interval.end())
    }
    /// Evaluate the underlying line at the given x coordinate.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        self.line.y_at(x)
    }
    /// Return the segment style.
    #[must_use]
    pub const fn style(&self) -> RayStyle {
        self.style
    }
}

/// Build the three canonical construction rays for the given lens and
/// object over the diagram width `[-half_width, half_width]`:
///
/// 1. the ray through the object-side focal point, leaving the lens parallel
///    to the axis,
/// 2. the axis-parallel ray, refracted through the image-side focal point,
/// 3. the undeviated ray through the lens center.
///
/// For a non-negative object distance the mirrored construction is used,
/// where the through-center ray carries no virtual extension.
///
/// # Errors
/// This function returns a [`crate::error::LensimError::Geometry`] if a ray
/// is degenerate, i.e. the object sits in the lens or a focal plane. Those
/// distances form no finite image and no rays are drawn for them.
pub fn construction_rays(
    lens: &LensSystem,
    object: &ObjectState,
    half_width: f64,
) -> LsResult<Vec<RaySegment>> {
    let s = object.distance();
    let y = object.height();
    let f_ob = lens.object_focal();
    let f_im = lens.image_focal();
    let tip = Point2::new(s, y);
    let center = Point2::new(0.0, 0.0);
    let object_focus = Point2::new(f_ob, 0.0);
    let image_focus = Point2::new(f_im, 0.0);

    let left = Interval::new(-half_width, 0.0)?;
    let right = Interval::new(0.0, half_width)?;

    let mut segments = Vec::with_capacity(9);
    if s < 0.0 {
        let object_side = Interval::new(s, 0.0)?;

        // focal ray: through F, then parallel at its lens-plane exit height
        let focal_incidence =
            RaySegment::from_points(object_side, &[tip, object_focus], RayStyle::Incidence)?;
        let exit_height = Point2::new(0.0, focal_incidence.end_height());
        segments.push(focal_incidence);
        segments.push(RaySegment::from_points(
            right,
            &[exit_height],
            RayStyle::Transmitted,
        )?);
        segments.push(RaySegment::from_points(
            left,
            &[exit_height],
            RayStyle::Virtual,
        )?);

        // parallel ray: horizontal up to the lens, then through F'
        segments.push(RaySegment::from_points(
            object_side,
            &[tip],
            RayStyle::Incidence,
        )?);
        let refracted = [Point2::new(0.0, y), image_focus];
        segments.push(RaySegment::from_points(
            right,
            &refracted,
            RayStyle::Transmitted,
        )?);
        segments.push(RaySegment::from_points(left, &refracted, RayStyle::Virtual)?);

        // center ray: undeviated through the lens center
        let undeviated = [tip, center];
        segments.push(RaySegment::from_points(
            object_side,
            &undeviated,
            RayStyle::Incidence,
        )?);
        segments.push(RaySegment::from_points(
            right,
            &undeviated,
            RayStyle::Transmitted,
        )?);
        segments.push(RaySegment::from_points(left, &undeviated, RayStyle::Virtual)?);
    } else {
        // mirrored construction for an object on the image side
        let focal_incidence =
            RaySegment::from_points(left, &[tip, object_focus], RayStyle::Incidence)?;
        let exit_height = Point2::new(0.0, focal_incidence.end_height());
        segments.push(focal_incidence);
        segments.push(RaySegment::from_points(
            right,
            &[exit_height],
            RayStyle::Transmitted,
        )?);
        segments.push(RaySegment::from_points(
            left,
            &[exit_height],
            RayStyle::Virtual,
        )?);

        segments.push(RaySegment::from_points(right, &[tip], RayStyle::Incidence)?);
        let refracted = [Point2::new(0.0, y), image_focus];
        segments.push(RaySegment::from_points(right, &refracted, RayStyle::Virtual)?);
        segments.push(RaySegment::from_points(
            left,
            &refracted,
            RayStyle::Transmitted,
        )?);

        let undeviated = [tip, center];
        segments.push(RaySegment::from_points(
            left,
            &undeviated,
            RayStyle::Incidence,
        )?);
        segments.push(RaySegment::from_points(
            right,
            &undeviated,
            RayStyle::Transmitted,
        )?);
    }
    Ok(segments)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::imaging::compute_image_position;
    use approx::assert_relative_eq;

    fn rays_for(distance: f64) -> Vec<RaySegment> {
        let lens = LensSystem::default();
        let object = ObjectState::new(distance, 0.3).unwrap();
        construction_rays(&lens, &object, 5.0).unwrap()
    }
    #[test]
    fn segment_from_two_points() {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let points = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let segment =
            RaySegment::from_points(interval, &points, RayStyle::Transmitted).unwrap();
        assert_relative_eq!(segment.end_height(), 2.0);
        assert_eq!(segment.start_point(), (0.0, 0.0));
        assert_eq!(segment.end_point(), (2.0, 2.0));
    }
    #[test]
    fn segment_from_single_point() {
        let interval = Interval::new(-5.0, 0.0).unwrap();
        let segment =
            RaySegment::from_points(interval, &[Point2::new(3.0, 5.0)], RayStyle::Virtual)
                .unwrap();
        assert_relative_eq!(segment.end_height(), 5.0);
        assert_relative_eq!(segment.start_point().1, 5.0);
    }
    #[test]
    fn segment_layout_left_object() {
        let segments = rays_for(-1.8);
        assert_eq!(segments.len(), 9);
        let styles: Vec<_> = segments.iter().map(RaySegment::style).collect();
        assert_eq!(
            styles,
            vec![
                RayStyle::Incidence,
                RayStyle::Transmitted,
                RayStyle::Virtual,
                RayStyle::Incidence,
                RayStyle::Transmitted,
                RayStyle::Virtual,
                RayStyle::Incidence,
                RayStyle::Transmitted,
                RayStyle::Virtual,
            ]
        );
        // incidence segments start at the object position
        assert_relative_eq!(segments[0].start_point().0, -1.8);
        assert_relative_eq!(segments[3].start_point().0, -1.8);
        assert_relative_eq!(segments[6].start_point().0, -1.8);
    }
    #[test]
    fn segment_layout_right_object() {
        let segments = rays_for(1.8);
        assert_eq!(segments.len(), 8);
        let styles: Vec<_> = segments.iter().map(RaySegment::style).collect();
        assert_eq!(
            styles,
            vec![
                RayStyle::Incidence,
                RayStyle::Transmitted,
                RayStyle::Virtual,
                RayStyle::Incidence,
                RayStyle::Virtual,
                RayStyle::Transmitted,
                RayStyle::Incidence,
                RayStyle::Transmitted,
            ]
        );
    }
    #[test]
    fn outgoing_rays_meet_in_image_tip() {
        let image = compute_image_position(-1.8, 0.3, 1.0).unwrap();
        let segments = rays_for(-1.8);
        // transmitted segments of all three rays pass through the image tip
        for index in [1, 4, 7] {
            assert_relative_eq!(
                segments[index].y_at(image.distance()),
                image.height(),
                max_relative = 1e-12
            );
        }
    }
    #[test]
    fn outgoing_rays_meet_in_image_tip_mirrored() {
        let image = compute_image_position(1.8, 0.3, 1.0).unwrap();
        let segments = rays_for(1.8);
        for index in [1, 5, 7] {
            assert_relative_eq!(
                segments[index].y_at(image.distance()),
                image.height(),
                max_relative = 1e-12
            );
        }
        // the virtual branch of the parallel ray lies on the same line as
        // its transmitted branch
        assert_relative_eq!(
            segments[4].y_at(image.distance()),
            image.height(),
            max_relative = 1e-12
        );
    }
    #[test]
    fn focal_ray_chains_exit_height() {
        let segments = rays_for(-1.8);
        let exit_height = segments[0].end_height();
        assert_relative_eq!(exit_height, -0.375, max_relative = 1e-12);
        // the transmitted continuation is horizontal at the exit height
        assert_relative_eq!(segments[1].y_at(0.0), exit_height);
        assert_relative_eq!(segments[1].y_at(5.0), exit_height);
    }
    #[test]
    fn degenerate_distances_have_no_rays() {
        let lens = LensSystem::default();
        for s in [0.0, -1.0] {
            let object = ObjectState::new(s, 0.3).unwrap();
            assert!(construction_rays(&lens, &object, 5.0).is_err());
        }
    }
}
