//! Procedural atom visualizer.
//!
//! Builds an animated, decorative 3D model of an atom from three integers
//! (protons, neutrons, electrons): a Fibonacci-sphere nucleus of nucleons
//! with quarks and exchange particles, plus one fluctuating orbital mesh per
//! occupied electron shell. Geometry is regenerated every frame as a pure
//! function of the parameters and an animation clock; drawing goes through
//! the abstract [`viewer::Viewer`] capability, which the bundled web server
//! implements as a JSON display list for the browser.

pub mod driver;
pub mod elements;
pub mod error;
pub mod exchange;
pub mod geometry;
pub mod nucleus;
pub mod orbital;
pub mod scene;
pub mod server;
pub mod shells;
pub mod store;
pub mod viewer;

pub use driver::{start_visualization, stop_visualization, AnimationDriver, FrameScheduler};
pub use error::VizError;
pub use scene::{AtomParameters, AtomScene, DebugScene, Scene};
pub use viewer::{RecordingViewer, Viewer};
