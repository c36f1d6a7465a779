//! Scene builders: translate generated geometry into draw calls.
//!
//! A [`Scene`] owns whatever parameter-derived state survives across frames
//! (nucleus layout, shell configuration) and redraws everything against the
//! viewer each tick. Time-dependent geometry is regenerated from scratch
//! every frame.

use crate::error::VizError;
use crate::exchange::{emit_gluon_exchanges, emit_meson_exchanges};
use crate::geometry::Point3D;
use crate::nucleus::{layout_nucleus, Nucleon};
use crate::orbital::build_orbital_mesh;
use crate::shells::{electron_configuration, OrbitalShell};
use crate::viewer::{Color, CylinderSpec, SphereSpec, Viewer};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Immutable snapshot of the user's particle counts. Replaced wholesale on
/// every change; never patched mid-pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomParameters {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
}

/// One drawable scene. The driver calls `reset` when parameters change and
/// `draw` once per frame.
pub trait Scene {
    /// Rebuilds parameter-derived state (layouts, configurations).
    fn reset(&mut self);

    /// Emits the full frame at `time` against an already-cleared viewer.
    fn draw(
        &mut self,
        viewer: &mut dyn Viewer,
        time: f64,
        rng: &mut dyn RngCore,
    ) -> Result<(), VizError>;

    /// Clock increment between frames.
    fn time_step(&self) -> f64;
}

/// The atom view: nucleus with quarks and exchange particles, plus one
/// fluctuating orbital mesh per occupied shell.
pub struct AtomScene {
    params: AtomParameters,
    nucleons: Vec<Nucleon>,
    shells: Vec<OrbitalShell>,
}

impl AtomScene {
    pub const TIME_STEP: f64 = 0.1;

    pub fn new(params: AtomParameters) -> Self {
        let mut scene = AtomScene {
            params,
            nucleons: Vec::new(),
            shells: Vec::new(),
        };
        scene.reset();
        scene
    }

    /// Full replacement of the parameter snapshot.
    pub fn set_parameters(&mut self, params: AtomParameters) {
        self.params = params;
        self.reset();
    }

    pub fn parameters(&self) -> AtomParameters {
        self.params
    }

    pub fn nucleons(&self) -> &[Nucleon] {
        &self.nucleons
    }

    pub fn shells(&self) -> &[OrbitalShell] {
        &self.shells
    }
}

impl Scene for AtomScene {
    fn reset(&mut self) {
        // Positioned once per parameter set, not re-randomized per frame.
        self.nucleons = layout_nucleus(self.params.protons, self.params.neutrons);
        self.shells = electron_configuration(self.params.electrons);
    }

    fn draw(
        &mut self,
        viewer: &mut dyn Viewer,
        time: f64,
        rng: &mut dyn RngCore,
    ) -> Result<(), VizError> {
        for nucleon in &self.nucleons {
            viewer.add_sphere(SphereSpec {
                center: nucleon.center,
                radius: nucleon.radius,
                color: nucleon.kind.color(),
                opacity: 1.0,
            });
            for quark in &nucleon.quarks {
                viewer.add_sphere(SphereSpec {
                    center: quark.center,
                    radius: quark.radius,
                    color: quark.color(),
                    opacity: 1.0,
                });
            }
        }

        emit_meson_exchanges(viewer, &self.nucleons, time, &mut *rng);
        for nucleon in &self.nucleons {
            emit_gluon_exchanges(viewer, nucleon, time, &mut *rng);
        }

        for shell in &self.shells {
            let mesh = build_orbital_mesh(shell.label, shell.occupancy, time)?;
            viewer.add_custom_mesh(mesh);
        }
        Ok(())
    }

    fn time_step(&self) -> f64 {
        Self::TIME_STEP
    }
}

/// The standalone mesh-debug view: a pulsing central sphere, layered glow
/// shells, and a distorted cylinder lattice. No atom parameters involved.
pub struct DebugScene {
    grid_size: u32,
    sphere_radius: f64,
}

const DEBUG_GRID_COLORS: [Color; 5] = [
    Color::BLUE,
    Color::GREEN,
    Color::WHITE,
    Color::CYAN,
    Color::MAGENTA,
];

impl DebugScene {
    pub const TIME_STEP: f64 = 0.02;
    const GLOW_LAYERS: usize = 5;
    const SEGMENTS_PER_CELL: usize = 10;

    pub fn new() -> Self {
        DebugScene {
            grid_size: 20,
            sphere_radius: 5.0,
        }
    }

    /// Inverse-square falloff from the central sphere, clamped at zero.
    fn distortion(&self, p: &Point3D) -> f64 {
        let dist_sq = p.x * p.x + p.y * p.y + p.z * p.z;
        (self.sphere_radius * self.sphere_radius / dist_sq - 0.1).max(0.0)
    }

    fn draw_lattice(&self, viewer: &mut dyn Viewer) {
        let g = self.grid_size as f64;
        for i in 0..self.grid_size {
            for j in 0..self.grid_size {
                let theta1 = (i as f64 / g) * 2.0 * PI;
                let theta2 = ((i + 1) as f64 / g) * 2.0 * PI;
                let phi1 = (j as f64 / g) * PI;
                let phi2 = ((j + 1) as f64 / g) * PI;

                let color =
                    DEBUG_GRID_COLORS[((i + j) as usize) % DEBUG_GRID_COLORS.len()];

                for k in 0..Self::SEGMENTS_PER_CELL {
                    let t = k as f64 / Self::SEGMENTS_PER_CELL as f64;
                    let p1 =
                        Point3D::from_spherical(1.0, theta1 + t * (theta2 - theta1), phi1);
                    let p2 =
                        Point3D::from_spherical(1.0, theta1, phi1 + (phi2 - phi1) * t);

                    let d1 = self.distortion(&p1);
                    let d2 = self.distortion(&p2);

                    viewer.add_cylinder(CylinderSpec {
                        start: p1.scale(10.0 + d1),
                        end: p2.scale(10.0 + d2),
                        radius: 0.05,
                        color,
                        caps: true,
                    });
                }
            }
        }
    }
}

impl Default for DebugScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for DebugScene {
    fn reset(&mut self) {}

    fn draw(
        &mut self,
        viewer: &mut dyn Viewer,
        time: f64,
        _rng: &mut dyn RngCore,
    ) -> Result<(), VizError> {
        viewer.add_sphere(SphereSpec {
            center: Point3D::ORIGIN,
            radius: self.sphere_radius + time.sin() * 0.2,
            color: Color::YELLOW,
            opacity: 1.0,
        });

        for i in 0..Self::GLOW_LAYERS {
            viewer.add_sphere(SphereSpec {
                center: Point3D::ORIGIN,
                radius: self.sphere_radius
                    + 0.2 * (i + 1) as f64
                    + (time + i as f64).sin() * 0.1,
                color: Color::ORANGE,
                opacity: 0.2 - 0.03 * i as f64,
            });
        }

        self.draw_lattice(viewer);
        Ok(())
    }

    fn time_step(&self) -> f64 {
        Self::TIME_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::RecordingViewer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_carbon_scene_draw_counts() {
        let mut scene = AtomScene::new(AtomParameters {
            protons: 6,
            neutrons: 6,
            electrons: 6,
        });
        assert_eq!(scene.nucleons().len(), 12);
        assert_eq!(scene.shells().len(), 3);

        let mut viewer = RecordingViewer::new();
        let mut rng = StdRng::seed_from_u64(5);
        scene.draw(&mut viewer, 0.0, &mut rng).unwrap();

        // 12 nucleons + 36 quarks, plus a nondeterministic number of
        // exchange spheres on top
        assert!(viewer.sphere_count() >= 48);
        assert_eq!(viewer.mesh_count(), 3);
    }

    #[test]
    fn test_hydrogen_scene() {
        let mut scene = AtomScene::new(AtomParameters {
            protons: 1,
            neutrons: 0,
            electrons: 1,
        });
        assert_eq!(scene.nucleons().len(), 1);
        assert_eq!(scene.shells().len(), 1);
        assert_eq!(scene.shells()[0].occupancy, 1);

        let mut viewer = RecordingViewer::new();
        let mut rng = StdRng::seed_from_u64(5);
        scene.draw(&mut viewer, 0.0, &mut rng).unwrap();

        // 1 proton + 3 quarks + gluons (at most 3 pairs), no mesons possible
        assert!(viewer.sphere_count() >= 4);
        assert!(viewer.sphere_count() <= 7);
        assert_eq!(viewer.mesh_count(), 1);
    }

    #[test]
    fn test_empty_atom_draws_nothing_fatal() {
        let mut scene = AtomScene::new(AtomParameters {
            protons: 0,
            neutrons: 0,
            electrons: 0,
        });
        let mut viewer = RecordingViewer::new();
        let mut rng = StdRng::seed_from_u64(5);
        scene.draw(&mut viewer, 1.0, &mut rng).unwrap();
        assert_eq!(viewer.calls().len(), 0);
    }

    #[test]
    fn test_set_parameters_resets_layout() {
        let mut scene = AtomScene::new(AtomParameters {
            protons: 1,
            neutrons: 0,
            electrons: 1,
        });
        scene.set_parameters(AtomParameters {
            protons: 2,
            neutrons: 2,
            electrons: 2,
        });
        assert_eq!(scene.nucleons().len(), 4);
        assert_eq!(scene.shells().len(), 1);
        assert_eq!(scene.shells()[0].occupancy, 2);
    }

    #[test]
    fn test_debug_scene_counts() {
        let mut scene = DebugScene::new();
        let mut viewer = RecordingViewer::new();
        let mut rng = StdRng::seed_from_u64(5);
        scene.draw(&mut viewer, 0.3, &mut rng).unwrap();

        // central sphere + 5 glow layers
        assert_eq!(viewer.sphere_count(), 6);
        // 20x20 cells, 10 segments each
        assert_eq!(viewer.cylinder_count(), 4000);
        assert!((scene.time_step() - 0.02).abs() < 1e-12);
    }
}
