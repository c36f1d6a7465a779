//! The per-frame animation loop.
//!
//! The driver owns the clock, the viewer, and the scene. Each tick it clears
//! the scene, asks the scene to redraw itself at the current time, renders,
//! and advances the clock by the scene's fixed step. Frame pacing lives
//! behind the [`FrameScheduler`] capability so the loop is testable without
//! a display.

use crate::error::VizError;
use crate::scene::{AtomParameters, AtomScene, Scene};
use crate::viewer::Viewer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Monotonic animation time, advanced by a fixed step per frame.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    time: f64,
    step: f64,
}

impl AnimationClock {
    pub fn new(step: f64) -> Self {
        AnimationClock { time: 0.0, step }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn tick(&mut self) {
        self.time += self.step;
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Jumps to an absolute time. Used when an external caller (the browser)
    /// owns the clock and requests frames at arbitrary times.
    pub fn seek(&mut self, time: f64) {
        self.time = time;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Grants frame slots to the driver's run loop. Returning `false` means no
/// further frames: either real teardown or an exhausted test budget. The
/// driver issues exactly one request per completed frame, so frames never
/// overlap.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> bool;
}

/// Scheduler that grants a fixed number of frames and then stops the loop.
#[derive(Debug, Clone, Copy)]
pub struct FrameBudget {
    remaining: usize,
}

impl FrameBudget {
    pub fn new(frames: usize) -> Self {
        FrameBudget { remaining: frames }
    }
}

impl FrameScheduler for FrameBudget {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            false
        } else {
            self.remaining -= 1;
            true
        }
    }
}

/// Drives one scene against one exclusively-owned viewer.
///
/// Lifecycle: `Idle` on construction, `Running` after `start`, back to
/// `Idle` on `stop`. A stopped driver ignores ticks, so a pending frame
/// that fires after teardown renders nothing.
pub struct AnimationDriver<V: Viewer, S: Scene, R: Rng = StdRng> {
    viewer: V,
    scene: S,
    clock: AnimationClock,
    state: DriverState,
    rng: R,
}

impl<V: Viewer, S: Scene> AnimationDriver<V, S, StdRng> {
    /// Fails fast with [`VizError::Configuration`] when the viewer's drawing
    /// surface is unavailable; a broken surface is not worth retrying.
    pub fn new(viewer: V, scene: S) -> Result<Self, VizError> {
        Self::with_rng(viewer, scene, StdRng::from_entropy())
    }
}

impl<V: Viewer, S: Scene, R: Rng> AnimationDriver<V, S, R> {
    pub fn with_rng(viewer: V, scene: S, rng: R) -> Result<Self, VizError> {
        if !viewer.is_available() {
            return Err(VizError::Configuration(
                "drawing surface rejected the visualization".to_string(),
            ));
        }
        let clock = AnimationClock::new(scene.time_step());
        Ok(AnimationDriver {
            viewer,
            scene,
            clock,
            state: DriverState::Idle,
            rng,
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }

    pub fn into_viewer(self) -> V {
        self.viewer
    }

    /// Resets the scene and clock and enters `Running`.
    pub fn start(&mut self) {
        self.scene.reset();
        self.clock.reset();
        self.state = DriverState::Running;
        log::debug!("animation started (step {})", self.clock.step());
    }

    /// Leaves the loop. Synchronous: once this returns, no further frame is
    /// granted, so two drivers can never double-render one surface.
    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            log::debug!("animation stopped at t = {:.2}", self.clock.time());
        }
        self.state = DriverState::Idle;
    }

    /// Positions the clock for the next tick.
    pub fn seek(&mut self, time: f64) {
        self.clock.seek(time);
    }

    /// One frame: clear, redraw at the current time, render, advance.
    /// A no-op on an idle driver.
    pub fn tick(&mut self) -> Result<(), VizError> {
        if self.state != DriverState::Running {
            return Ok(());
        }
        self.viewer.clear_scene();
        self.scene
            .draw(&mut self.viewer, self.clock.time(), &mut self.rng)?;
        self.viewer.render();
        self.clock.tick();
        Ok(())
    }

    /// Ticks until the scheduler stops granting frames or the driver is
    /// stopped. Frames run strictly one at a time.
    pub fn run(&mut self, scheduler: &mut dyn FrameScheduler) -> Result<(), VizError> {
        while self.state == DriverState::Running && scheduler.next_frame() {
            self.tick()?;
        }
        Ok(())
    }
}

impl<V: Viewer, R: Rng> AnimationDriver<V, AtomScene, R> {
    /// Treats a parameter change as a full reset signal: the running loop is
    /// torn down, the layout recomputed, and the loop restarted from t = 0.
    pub fn apply_parameters(&mut self, params: AtomParameters) {
        let was_running = self.state == DriverState::Running;
        self.stop();
        self.viewer.clear_scene();
        self.scene.set_parameters(params);
        if was_running {
            self.start();
        }
    }

    pub fn parameters(&self) -> AtomParameters {
        self.scene.parameters()
    }
}

/// Handle for a running atom visualization.
pub type AtomVisualization<V> = AnimationDriver<V, AtomScene, StdRng>;

/// Builds and starts an atom visualization against the given viewer.
pub fn start_visualization<V: Viewer>(
    params: AtomParameters,
    viewer: V,
) -> Result<AtomVisualization<V>, VizError> {
    let mut driver = AnimationDriver::new(viewer, AtomScene::new(params))?;
    driver.start();
    Ok(driver)
}

/// Tears a visualization down. Idempotent.
pub fn stop_visualization<V: Viewer, S: Scene, R: Rng>(driver: &mut AnimationDriver<V, S, R>) {
    driver.stop();
}
