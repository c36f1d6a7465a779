//! Point samplers shared by the orbital and nucleus builders.
//!
//! Everything here is pure and deterministic: the same inputs always produce
//! the same point sequence, which is what lets the animation loop regenerate
//! geometry every frame without visual jitter.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3D { x, y, z }
    }

    /// Spherical-to-Cartesian conversion with `theta` the azimuth and `phi`
    /// the polar angle measured from +z.
    pub fn from_spherical(radius: f64, theta: f64, phi: f64) -> Self {
        Point3D {
            x: radius * phi.sin() * theta.cos(),
            y: radius * phi.sin() * theta.sin(),
            z: radius * phi.cos(),
        }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn add(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    pub fn scale(&self, k: f64) -> Point3D {
        Point3D {
            x: self.x * k,
            y: self.y * k,
            z: self.z * k,
        }
    }

    /// Unit vector in the same direction, or `None` for a zero-length input.
    pub fn normalized(&self) -> Option<Point3D> {
        let len = self.length();
        if len <= f64::EPSILON {
            None
        } else {
            Some(self.scale(1.0 / len))
        }
    }

    /// Linear interpolation between `a` and `b` at `t` in [0, 1].
    pub fn lerp(a: &Point3D, b: &Point3D, t: f64) -> Point3D {
        Point3D {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
            z: a.z + (b.z - a.z) * t,
        }
    }
}

/// Row-major grid of `resolution * resolution` points on the sphere of the
/// given radius: `theta` sweeps [0, 2pi) in the outer index, `phi` sweeps
/// [0, pi) in the inner index.
pub fn sample_sphere(radius: f64, resolution: u32) -> Vec<Point3D> {
    let res = resolution as usize;
    let mut points = Vec::with_capacity(res * res);
    for i in 0..res {
        let theta = (i as f64 / res as f64) * 2.0 * PI;
        for j in 0..res {
            let phi = (j as f64 / res as f64) * PI;
            points.push(Point3D::from_spherical(radius, theta, phi));
        }
    }
    points
}

/// Fibonacci-style placement of `count` points on the sphere of the given
/// radius: `phi_i = acos(-1 + 2i/N)`, `theta_i = sqrt(N * pi) * phi_i`.
/// `count == 0` short-circuits to an empty sequence (no division by N).
pub fn fibonacci_sphere(count: usize, radius: f64) -> Vec<Point3D> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let phi = (-1.0 + 2.0 * i as f64 / n).acos();
        let theta = (n * PI).sqrt() * phi;
        points.push(Point3D::from_spherical(radius, theta, phi));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sphere_count_and_radius() {
        let points = sample_sphere(2.0, 12);
        assert_eq!(points.len(), 144);
        for p in &points {
            assert!((p.length() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sample_sphere_minimal_resolution() {
        let points = sample_sphere(1.0, 1);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_fibonacci_sphere_on_shell() {
        let points = fibonacci_sphere(12, 0.3);
        assert_eq!(points.len(), 12);
        for p in &points {
            assert!((p.length() - 0.3).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fibonacci_sphere_empty() {
        assert!(fibonacci_sphere(0, 0.3).is_empty());
    }

    #[test]
    fn test_normalized_zero_guard() {
        assert!(Point3D::ORIGIN.normalized().is_none());
        let unit = Point3D::new(0.0, 0.0, 2.5).normalized().unwrap();
        assert!((unit.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Point3D::new(1.0, 2.0, 3.0);
        let b = Point3D::new(-1.0, 0.0, 5.0);
        assert_eq!(Point3D::lerp(&a, &b, 0.0), a);
        assert_eq!(Point3D::lerp(&a, &b, 1.0), b);
        let mid = Point3D::lerp(&a, &b, 0.5);
        assert!((mid.x - 0.0).abs() < 1e-12);
        assert!((mid.z - 4.0).abs() < 1e-12);
    }
}
