//! Orbital shell geometry: time-dependent perturbation of a spherical grid
//! and its triangulation into a translucent mesh.

use crate::error::VizError;
use crate::geometry::{sample_sphere, Point3D};
use crate::shells::ShellLabel;
use crate::viewer::{Color, CustomMesh};

/// Grid resolution per angular direction; every orbital mesh has
/// `ORBITAL_RESOLUTION^2` vertices.
pub const ORBITAL_RESOLUTION: u32 = 50;

/// Radial displacement of every grid point as a smooth function of time.
///
/// Each point gets a base wobble `sin(5*theta + 7*phi + t) * 0.3`, damped by
/// a subshell-dependent envelope and scaled by occupancy. The output is the
/// input scaled by `(1 + displacement)` componentwise, so the perturbed
/// surface stays star-shaped around the origin. Pure in all arguments:
/// identical inputs give bit-identical output, and the result is continuous
/// in `time`, which is what makes the frame loop look like an animation.
pub fn perturb(
    points: &[Point3D],
    label: ShellLabel,
    occupancy: u32,
    time: f64,
) -> Vec<Point3D> {
    let n = label.n as f64;
    points
        .iter()
        .map(|p| {
            let r = p.length();
            if r <= f64::EPSILON {
                // A point at the origin has no direction to displace along.
                return *p;
            }
            let theta = p.y.atan2(p.x);
            let phi = (p.z / r).clamp(-1.0, 1.0).acos();

            let mut displacement = (5.0 * theta + 7.0 * phi + time).sin() * 0.3;
            displacement *= match label.subshell {
                's' => (-r / n).exp() * (r * n + time).sin(),
                'p' => (-r / n).exp() * theta.cos() * (r * n + time).sin(),
                'd' => {
                    (-r / n).exp() * (3.0 * phi.cos() * phi.cos() - 1.0) * (r * n + time).sin()
                }
                // The fixed shell table never emits other subshells; leave
                // them undamped rather than invent an envelope.
                _ => 1.0,
            };
            displacement *= occupancy as f64 / 5.0;

            p.scale(1.0 + displacement)
        })
        .collect()
}

/// Builds the mesh for one active shell at the given animation time.
///
/// Samples a sphere of radius `n * 0.5` at [`ORBITAL_RESOLUTION`], perturbs
/// it, and triangulates the grid with two triangles per quad cell. The
/// azimuthal (theta) direction wraps modulo the resolution so the surface
/// closes over 2pi; the polar direction does not wrap. Vertex normals are
/// the normalized positions, which is exact for a sphere and a close
/// approximation for the perturbed surface.
pub fn build_orbital_mesh(label: &str, occupancy: u32, time: f64) -> Result<CustomMesh, VizError> {
    let label = ShellLabel::parse(label)?;
    let radius = label.n as f64 * 0.5;
    let base = sample_sphere(radius, ORBITAL_RESOLUTION);
    let points = perturb(&base, label, occupancy, time);

    let mut vertices = Vec::with_capacity(points.len() * 3);
    let mut normals = Vec::with_capacity(points.len() * 3);
    for p in &points {
        vertices.extend([p.x, p.y, p.z]);
        let n = p
            .normalized()
            .unwrap_or_else(|| Point3D::new(0.0, 0.0, 1.0));
        normals.extend([n.x, n.y, n.z]);
    }

    let res = ORBITAL_RESOLUTION;
    let mut faces = Vec::with_capacity((res * (res - 1) * 2) as usize);
    for i in 0..res {
        let i_next = (i + 1) % res;
        for j in 0..res - 1 {
            let a = i * res + j;
            let b = i * res + j + 1;
            let c = i_next * res + j;
            let d = i_next * res + j + 1;
            faces.push([a, b, c]);
            faces.push([b, d, c]);
        }
    }

    Ok(CustomMesh {
        vertices,
        faces,
        normals,
        color: Color::DEEP_SKY_BLUE,
        opacity: 0.1 + occupancy as f64 / 10.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::sample_sphere;

    fn label(s: &str) -> ShellLabel {
        ShellLabel::parse(s).unwrap()
    }

    #[test]
    fn test_perturb_output_is_finite() {
        let base = sample_sphere(1.0, 10);
        let out = perturb(&base, label("2p"), 4, 1.5);
        assert_eq!(out.len(), base.len());
        for p in &out {
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        }
    }

    #[test]
    fn test_perturb_is_deterministic() {
        let base = sample_sphere(1.5, 20);
        let a = perturb(&base, label("3d"), 7, 42.0);
        let b = perturb(&base, label("3d"), 7, 42.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_perturb_continuous_in_time() {
        let base = sample_sphere(1.0, 15);
        let t = 3.0;
        let dt = 1e-6;
        let before = perturb(&base, label("1s"), 2, t);
        let after = perturb(&base, label("1s"), 2, t + dt);
        for (a, b) in before.iter().zip(&after) {
            let delta = Point3D::new(b.x - a.x, b.y - a.y, b.z - a.z).length();
            // displacement magnitude is bounded, so a tiny dt moves points
            // by at most a small multiple of dt
            assert!(delta < 1e-4, "discontinuity: delta = {delta}");
        }
    }

    #[test]
    fn test_perturb_origin_guard() {
        let out = perturb(&[Point3D::ORIGIN], label("1s"), 2, 0.7);
        assert_eq!(out[0], Point3D::ORIGIN);
    }

    #[test]
    fn test_mesh_shape() {
        let mesh = build_orbital_mesh("2p", 3, 0.0).unwrap();
        let res = ORBITAL_RESOLUTION as usize;
        assert_eq!(mesh.vertex_count(), res * res);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
        assert_eq!(mesh.faces.len(), res * (res - 1) * 2);
        for face in &mesh.faces {
            for &idx in face {
                assert!((idx as usize) < res * res);
            }
        }
    }

    #[test]
    fn test_mesh_normals_are_unit() {
        let mesh = build_orbital_mesh("1s", 2, 2.5).unwrap();
        for chunk in mesh.normals.chunks(3) {
            let len = (chunk[0] * chunk[0] + chunk[1] * chunk[1] + chunk[2] * chunk[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mesh_opacity_tracks_occupancy() {
        let sparse = build_orbital_mesh("1s", 1, 0.0).unwrap();
        let full = build_orbital_mesh("1s", 2, 0.0).unwrap();
        assert!((sparse.opacity - 0.2).abs() < 1e-12);
        assert!((full.opacity - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_mesh_rejects_malformed_label() {
        assert!(build_orbital_mesh("ps", 2, 0.0).is_err());
        assert!(build_orbital_mesh("", 2, 0.0).is_err());
    }
}
