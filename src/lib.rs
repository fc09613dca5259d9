//! This is the documentation for the **LENSIM** software package, an
//! interactive thin-lens imaging diagram.
//!
//! One ideal thin lens sits in the plane `x = 0`; a single interactive
//! parameter, the signed object distance, is read from the console. Every
//! accepted value recomputes the image position and height from the
//! thin-lens equation and re-renders the diagram (optical axis, lens plane,
//! focal points, object, image and the three canonical construction rays)
//! as a completely fresh frame.
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod error;
pub mod geometry;
pub mod imaging;
pub mod lens;
pub mod plottable;
pub mod rays;
pub mod scene;
pub mod simulator;

pub use simulator::Simulator;
