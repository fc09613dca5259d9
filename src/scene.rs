#![warn(missing_docs)]
//! Frame model of the imaging diagram.
//!
//! A [`Scene`] is a pure function of the current simulator state: every
//! redraw builds a complete new scene (axis, lens plane, focal points,
//! object, image, rays, readout labels) and the previous frame is discarded.
//! Scenes are never patched incrementally.
use crate::{
    error::LsResult,
    imaging::{ImageState, ObjectState},
    lens::LensSystem,
    rays::{construction_rays, RaySegment},
};

/// Half width of the diagram in focal-length units (x range `[-5, 5]`).
pub const HALF_WIDTH: f64 = 5.0;
/// Half height of the diagram (y range `[-1, 1]`).
pub const HALF_HEIGHT: f64 = 1.0;
/// Half extent of the drawn lens plane along y.
pub const LENS_HALF_EXTENT: f64 = 0.8;

const FOCAL_LABEL_X_OFFSET: f64 = 0.01;
const FOCAL_LABEL_Y: f64 = -0.12;

/// A text label anchored at diagram coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLabel {
    /// label text
    pub text: String,
    /// anchor position in diagram coordinates
    pub position: (f64, f64),
}

/// A vertical arrow standing on the optical axis (object or image).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalArrow {
    /// signed x position
    pub position: f64,
    /// signed arrow height
    pub height: f64,
}

/// All elements of one diagram frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// x positions of the two focal points marked on the axis
    pub focal_marks: [f64; 2],
    /// labels `F` and `F'` next to the focal points
    pub focal_labels: [DiagramLabel; 2],
    /// the object arrow
    pub object: VerticalArrow,
    /// the image arrow; `None` for an image at infinity
    pub image: Option<VerticalArrow>,
    /// the construction ray segments; empty for an image at infinity
    pub rays: Vec<RaySegment>,
    /// numeric readouts for `s`, `s'`, `y` and `y'`
    pub readouts: [DiagramLabel; 4],
}

impl Scene {
    /// Build the frame for the given state.
    ///
    /// # Errors
    /// This function returns a [`crate::error::LensimError::Geometry`] if
    /// the ray construction fails for a state which forms a finite image.
    pub fn new(
        lens: &LensSystem,
        object: &ObjectState,
        image: Option<&ImageState>,
    ) -> LsResult<Self> {
        let f_ob = lens.object_focal();
        let f_im = lens.image_focal();
        let rays = match image {
            Some(_) => construction_rays(lens, object, HALF_WIDTH)?,
            None => Vec::new(),
        };
        let image_distance_text = image.map_or_else(
            || "s' = \u{221e}".to_owned(),
            |image| format!("s' = {:.2}", image.distance()),
        );
        let image_height_text = image.map_or_else(
            || "y' = \u{2014}".to_owned(),
            |image| format!("y' = {:.2}", image.height()),
        );
        Ok(Self {
            focal_marks: [f_ob, f_im],
            focal_labels: [
                DiagramLabel {
                    text: "F".to_owned(),
                    position: (f_ob + FOCAL_LABEL_X_OFFSET, FOCAL_LABEL_Y),
                },
                DiagramLabel {
                    text: "F'".to_owned(),
                    position: (f_im + FOCAL_LABEL_X_OFFSET, FOCAL_LABEL_Y),
                },
            ],
            object: VerticalArrow {
                position: object.distance(),
                height: object.height(),
            },
            image: image.map(|image| VerticalArrow {
                position: image.distance(),
                height: image.height(),
            }),
            rays,
            readouts: [
                DiagramLabel {
                    text: format!("s = {:.2}", object.distance()),
                    position: (2.0, 0.95),
                },
                DiagramLabel {
                    text: image_distance_text,
                    position: (4.0, 0.95),
                },
                DiagramLabel {
                    text: format!("y = {:.2}", object.height()),
                    position: (2.0, 0.80),
                },
                DiagramLabel {
                    text: image_height_text,
                    position: (4.0, 0.80),
                },
            ],
        })
    }
}
