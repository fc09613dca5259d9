#![warn(missing_docs)]
//! Simulator state and the redraw cycle.
//!
//! The simulator state is an immutable value; changing the object distance
//! produces a new state through a pure update function. Rendering is layered
//! on top: each accepted slider value drives one synchronous
//! Idle -> Computing -> Clearing -> Redrawing cycle which runs to completion
//! before the next value can be processed.
use crate::{
    error::{LensimError, LsResult},
    imaging::{compute_image_position, ImageState, ObjectState, DEFAULT_OBJECT_HEIGHT},
    lens::LensSystem,
    plottable::Plottable,
    scene::{Scene, HALF_WIDTH},
};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Object distance shown on construction.
pub const INITIAL_OBJECT_DISTANCE: f64 = -1.8;
/// File name of the one-time snapshot written after the first render.
pub const SNAPSHOT_FILE: &str = "simul.png";

/// A clamping range control, the console stand-in for a GUI slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    min: f64,
    max: f64,
    value: f64,
}

impl Slider {
    /// Create a new slider over `[min, max]` with the given initial value
    /// (clamped into the range).
    ///
    /// # Errors
    /// This function returns a [`LensimError::Setup`] for non-finite bounds
    /// or `min >= max`.
    pub fn new(min: f64, max: f64, initial: f64) -> LsResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max || !initial.is_finite() {
            return Err(LensimError::Setup(format!(
                "invalid slider range [{min}, {max}] or initial value {initial}"
            )));
        }
        Ok(Self {
            min,
            max,
            value: initial.clamp(min, max),
        })
    }
    /// Set a new value, clamped to the slider range, and return it.
    pub fn set(&mut self, value: f64) -> f64 {
        self.value = value.clamp(self.min, self.max);
        self.value
    }
    /// Return the current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
    /// Return the lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }
    /// Return the upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }
}

/// The complete simulator state: lens, object and the derived image.
///
/// The image is recomputed on every update and is `None` exactly for the
/// degenerate object distances without a finite image (object in the lens
/// plane or in the focal plane).
#[derive(Debug, Clone, PartialEq)]
pub struct SimState {
    lens: LensSystem,
    object: ObjectState,
    image: Option<ImageState>,
}

impl SimState {
    /// Create a state for the given lens and object parameters.
    ///
    /// # Errors
    /// This function returns a [`LensimError::Setup`] for non-finite object
    /// parameters.
    pub fn new(lens: LensSystem, object_distance: f64, object_height: f64) -> LsResult<Self> {
        let object = ObjectState::new(object_distance, object_height)?;
        let image = derive_image(&lens, &object)?;
        Ok(Self {
            lens,
            object,
            image,
        })
    }
    /// Pure update function: return a new state with the object moved to the
    /// given distance. `self` is left untouched.
    ///
    /// # Errors
    /// This function returns a [`LensimError::Setup`] for a non-finite
    /// distance.
    pub fn with_object_distance(&self, object_distance: f64) -> LsResult<Self> {
        let object = ObjectState::new(object_distance, self.object.height())?;
        let image = derive_image(&self.lens, &object)?;
        Ok(Self {
            lens: self.lens,
            object,
            image,
        })
    }
    /// Return the lens system.
    #[must_use]
    pub const fn lens(&self) -> &LensSystem {
        &self.lens
    }
    /// Return the object state.
    #[must_use]
    pub const fn object(&self) -> &ObjectState {
        &self.object
    }
    /// Return the derived image, `None` for an image at infinity.
    #[must_use]
    pub fn image(&self) -> Option<&ImageState> {
        self.image.as_ref()
    }
    /// Build the diagram frame for this state.
    ///
    /// # Errors
    /// This function propagates [`Scene::new`] errors.
    pub fn scene(&self) -> LsResult<Scene> {
        Scene::new(&self.lens, &self.object, self.image.as_ref())
    }
}

fn derive_image(lens: &LensSystem, object: &ObjectState) -> LsResult<Option<ImageState>> {
    match compute_image_position(object.distance(), object.height(), lens.image_focal()) {
        Ok(image) => Ok(Some(image)),
        Err(LensimError::Imaging(reason)) => {
            warn!("{reason}");
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

/// Phase of the synchronous redraw cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawPhase {
    /// waiting for the next slider value
    Idle,
    /// recomputing the image from the new object distance
    Computing,
    /// discarding the previous frame
    Clearing,
    /// building and rendering the new frame
    Redrawing,
}

/// Interactive thin-lens simulator: owns the state, the slider and the
/// output path and renders one frame per accepted slider value.
#[derive(Debug)]
pub struct Simulator {
    state: SimState,
    slider: Slider,
    output: PathBuf,
    phase: RedrawPhase,
    frames_rendered: u64,
}

impl Simulator {
    /// Create a simulator with the default lens, the default object height
    /// and the given initial object distance (clamped to the slider range).
    ///
    /// # Errors
    /// This function returns a [`LensimError::Setup`] for a non-finite
    /// initial distance.
    pub fn new(initial_distance: f64, output: PathBuf) -> LsResult<Self> {
        let slider = Slider::new(-HALF_WIDTH, HALF_WIDTH, initial_distance)?;
        let state = SimState::new(
            LensSystem::default(),
            slider.value(),
            DEFAULT_OBJECT_HEIGHT,
        )?;
        Ok(Self {
            state,
            slider,
            output,
            phase: RedrawPhase::Idle,
            frames_rendered: 0,
        })
    }
    /// Return the current state.
    #[must_use]
    pub const fn state(&self) -> &SimState {
        &self.state
    }
    /// Return the slider.
    #[must_use]
    pub const fn slider(&self) -> &Slider {
        &self.slider
    }
    /// Return the current redraw phase ([`RedrawPhase::Idle`] outside of
    /// [`Simulator::update`]).
    #[must_use]
    pub const fn phase(&self) -> RedrawPhase {
        self.phase
    }
    /// Return the number of frames rendered so far.
    #[must_use]
    pub const fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
    /// Run one full redraw cycle for the requested object distance: clamp it
    /// through the slider, derive the new state, rebuild the scene from
    /// scratch and render it to the output file.
    ///
    /// # Errors
    /// This function propagates state update and rendering errors; the
    /// simulator returns to [`RedrawPhase::Idle`] in either case.
    pub fn update(&mut self, requested_distance: f64) -> LsResult<()> {
        let result = self.redraw_cycle(requested_distance);
        self.phase = RedrawPhase::Idle;
        result
    }
    fn redraw_cycle(&mut self, requested_distance: f64) -> LsResult<()> {
        self.phase = RedrawPhase::Computing;
        let value = self.slider.set(requested_distance);
        debug!("computing image for object distance {value}");
        self.state = self.state.with_object_distance(value)?;

        // the previous frame is dropped wholesale, never patched
        self.phase = RedrawPhase::Clearing;

        self.phase = RedrawPhase::Redrawing;
        debug!("redrawing frame {}", self.frames_rendered + 1);
        self.state.scene()?.to_plot(&self.output)?;
        self.frames_rendered += 1;
        Ok(())
    }
    /// Write the static [`SNAPSHOT_FILE`] snapshot of the current frame to
    /// the working directory. Called once after the first render.
    ///
    /// # Errors
    /// This function propagates scene building and rendering errors.
    pub fn save_snapshot(&self) -> LsResult<()> {
        self.state.scene()?.to_plot(Path::new(SNAPSHOT_FILE))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn slider_clamps() {
        let mut slider = Slider::new(-5.0, 5.0, -1.8).unwrap();
        assert_relative_eq!(slider.value(), -1.8);
        assert_relative_eq!(slider.set(7.3), 5.0);
        assert_relative_eq!(slider.set(-12.0), -5.0);
        assert_relative_eq!(slider.set(0.25), 0.25);
    }
    #[test]
    fn slider_new() {
        assert!(Slider::new(5.0, -5.0, 0.0).is_err());
        assert!(Slider::new(f64::NAN, 5.0, 0.0).is_err());
        assert!(Slider::new(-5.0, 5.0, f64::NAN).is_err());
        let slider = Slider::new(-5.0, 5.0, 99.0).unwrap();
        assert_relative_eq!(slider.value(), 5.0);
    }
    #[test]
    fn state_update_is_pure() {
        let state = SimState::new(LensSystem::default(), -1.8, 0.3).unwrap();
        let moved = state.with_object_distance(-2.5).unwrap();
        assert_relative_eq!(state.object().distance(), -1.8);
        assert_relative_eq!(moved.object().distance(), -2.5);
        assert_relative_eq!(moved.object().height(), 0.3);
        assert!(moved.image().is_some());
    }
    #[test]
    fn image_follows_object() {
        let state = SimState::new(LensSystem::default(), -1.8, 0.3).unwrap();
        let image = state.image().unwrap();
        assert_relative_eq!(image.distance(), 2.25);
        assert_relative_eq!(image.height(), -0.375, max_relative = 1e-12);
    }
    #[test]
    fn degenerate_distance_yields_no_image() {
        let state = SimState::new(LensSystem::default(), -1.0, 0.3).unwrap();
        assert!(state.image().is_none());
        let state = state.with_object_distance(0.0).unwrap();
        assert!(state.image().is_none());
        // and recovers once the object moves on
        let state = state.with_object_distance(-1.8).unwrap();
        assert!(state.image().is_some());
    }
    #[test]
    fn update_renders_frames() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("diagram.svg");
        let mut simulator = Simulator::new(INITIAL_OBJECT_DISTANCE, output.clone()).unwrap();
        assert_eq!(simulator.phase(), RedrawPhase::Idle);

        simulator.update(-2.5).unwrap();
        assert_eq!(simulator.frames_rendered(), 1);
        assert_eq!(simulator.phase(), RedrawPhase::Idle);
        assert!(output.exists());
        assert_relative_eq!(simulator.state().object().distance(), -2.5);

        // degenerate distance still renders a frame (object only, no image)
        simulator.update(-1.0).unwrap();
        assert_eq!(simulator.frames_rendered(), 2);
        assert!(simulator.state().image().is_none());
    }
    #[test]
    fn update_renders_png_frame() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("diagram.png");
        let mut simulator = Simulator::new(INITIAL_OBJECT_DISTANCE, output.clone()).unwrap();
        simulator.update(-1.8).unwrap();
        assert_eq!(simulator.frames_rendered(), 1);
        let written = std::fs::read(&output).unwrap();
        assert!(!written.is_empty());
    }
    #[test]
    fn update_clamps_through_slider() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("diagram.svg");
        let mut simulator = Simulator::new(-1.8, output).unwrap();
        simulator.update(42.0).unwrap();
        assert_relative_eq!(simulator.state().object().distance(), 5.0);
        assert_relative_eq!(simulator.slider().value(), 5.0);
    }
}
