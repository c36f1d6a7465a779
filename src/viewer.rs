//! Abstract drawing capability consumed by the scene builders.
//!
//! The core never talks to a concrete renderer. Scenes emit draw calls
//! against the [`Viewer`] trait; the shipped implementation is
//! [`RecordingViewer`], which captures the calls as a serializable display
//! list for the browser frontend (and doubles as the mock in tests).

use crate::geometry::Point3D;
use serde::Serialize;

/// RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    pub const RED: Color = Color::new(1.0, 0.2, 0.2);
    pub const GREEN: Color = Color::new(0.2, 1.0, 0.2);
    pub const BLUE: Color = Color::new(0.2, 0.2, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const ORANGE: Color = Color::new(1.0, 0.6, 0.1);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const DEEP_SKY_BLUE: Color = Color::new(0.0, 0.75, 1.0);

    /// Even mix of two colors (used for meson quark/antiquark pairs).
    pub fn blend(&self, other: &Color) -> Color {
        Color {
            r: (self.r + other.r) / 2.0,
            g: (self.g + other.g) / 2.0,
            b: (self.b + other.b) / 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SphereSpec {
    pub center: Point3D,
    pub radius: f64,
    pub color: Color,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CylinderSpec {
    pub start: Point3D,
    pub end: Point3D,
    pub radius: f64,
    pub color: Color,
    pub caps: bool,
}

/// Triangulated mesh in flat vertex/normal layout (x0, y0, z0, x1, ...),
/// one face entry per triangle of vertex indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomMesh {
    pub vertices: Vec<f64>,
    pub faces: Vec<[u32; 3]>,
    pub normals: Vec<f64>,
    pub color: Color,
    pub opacity: f64,
}

impl CustomMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// The drawing surface. A single mutable resource: exactly one animation
/// driver may hold a given viewer at a time.
pub trait Viewer {
    /// Whether the underlying surface can accept draw calls. Checked once at
    /// driver construction; `false` is a configuration error, not a retry.
    fn is_available(&self) -> bool {
        true
    }

    fn clear_scene(&mut self);
    fn add_sphere(&mut self, sphere: SphereSpec);
    fn add_custom_mesh(&mut self, mesh: CustomMesh);
    fn add_cylinder(&mut self, cylinder: CylinderSpec);
    fn render(&mut self);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCall {
    Sphere(SphereSpec),
    Mesh(CustomMesh),
    Cylinder(CylinderSpec),
}

/// Viewer that records draw calls instead of rasterizing them.
#[derive(Debug)]
pub struct RecordingViewer {
    calls: Vec<DrawCall>,
    render_count: usize,
    available: bool,
}

impl RecordingViewer {
    pub fn new() -> Self {
        RecordingViewer {
            calls: Vec::new(),
            render_count: 0,
            available: true,
        }
    }

    /// A viewer whose surface is gone; driver construction against it must
    /// fail fast.
    pub fn unavailable() -> Self {
        RecordingViewer {
            available: false,
            ..RecordingViewer::new()
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of completed `render()` calls since creation.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn sphere_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Sphere(_)))
            .count()
    }

    pub fn mesh_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Mesh(_)))
            .count()
    }

    pub fn cylinder_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Cylinder(_)))
            .count()
    }
}

impl Viewer for RecordingViewer {
    fn is_available(&self) -> bool {
        self.available
    }

    fn clear_scene(&mut self) {
        self.calls.clear();
    }

    fn add_sphere(&mut self, sphere: SphereSpec) {
        self.calls.push(DrawCall::Sphere(sphere));
    }

    fn add_custom_mesh(&mut self, mesh: CustomMesh) {
        self.calls.push(DrawCall::Mesh(mesh));
    }

    fn add_cylinder(&mut self, cylinder: CylinderSpec) {
        self.calls.push(DrawCall::Cylinder(cylinder));
    }

    fn render(&mut self) {
        self.render_count += 1;
    }
}
