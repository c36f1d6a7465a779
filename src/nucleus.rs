//! Nucleus layout: nucleons on a Fibonacci sphere, three quarks apiece.
//!
//! The layout is computed once per parameter set and redrawn unchanged every
//! frame; only the exchange particles move.

use crate::geometry::{fibonacci_sphere, Point3D};
use crate::viewer::Color;

pub const NUCLEUS_RADIUS: f64 = 0.3;
pub const NUCLEON_RADIUS: f64 = 0.1;
pub const QUARKS_PER_NUCLEON: usize = 3;

/// Color-charge analogy palette. A labeling device, nothing physical.
pub const QUARK_COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];
pub const ANTIQUARK_COLORS: [Color; 3] = [Color::CYAN, Color::MAGENTA, Color::YELLOW];
pub const GLUON_COLORS: [Color; 10] = [
    Color::RED,
    Color::BLUE,
    Color::GREEN,
    Color::BLUE,
    Color::BLUE,
    Color::GREEN,
    Color::RED,
    Color::GREEN,
    Color::GREEN,
    Color::RED,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NucleonKind {
    Proton,
    Neutron,
}

impl NucleonKind {
    pub fn color(&self) -> Color {
        match self {
            NucleonKind::Proton => Color::RED,
            NucleonKind::Neutron => Color::BLUE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quark {
    pub center: Point3D,
    pub radius: f64,
    /// Index into [`QUARK_COLORS`] (0..=2).
    pub color_index: usize,
}

impl Quark {
    pub fn color(&self) -> Color {
        QUARK_COLORS[self.color_index]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Nucleon {
    pub center: Point3D,
    pub radius: f64,
    pub kind: NucleonKind,
    pub quarks: [Quark; QUARKS_PER_NUCLEON],
}

/// Places `protons + neutrons` nucleons on a Fibonacci sphere of radius
/// [`NUCLEUS_RADIUS`]; the first `protons` entries are protons. Zero total
/// nucleons short-circuits to an empty layout.
pub fn layout_nucleus(protons: u32, neutrons: u32) -> Vec<Nucleon> {
    let total = (protons + neutrons) as usize;
    fibonacci_sphere(total, NUCLEUS_RADIUS)
        .into_iter()
        .enumerate()
        .map(|(i, center)| {
            let kind = if (i as u32) < protons {
                NucleonKind::Proton
            } else {
                NucleonKind::Neutron
            };
            Nucleon {
                center,
                radius: NUCLEON_RADIUS,
                kind,
                quarks: place_quarks(&center, NUCLEON_RADIUS),
            }
        })
        .collect()
}

/// Three quarks on a Fibonacci ring of radius `0.6 * nucleon_radius` around
/// the nucleon center, one per palette color.
fn place_quarks(center: &Point3D, nucleon_radius: f64) -> [Quark; QUARKS_PER_NUCLEON] {
    let ring = fibonacci_sphere(QUARKS_PER_NUCLEON, nucleon_radius * 0.6);
    std::array::from_fn(|i| Quark {
        center: center.add(&ring[i]),
        radius: nucleon_radius / 3.0,
        color_index: i,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carbon_nucleus_layout() {
        let nucleons = layout_nucleus(6, 6);
        assert_eq!(nucleons.len(), 12);
        let protons = nucleons
            .iter()
            .filter(|n| n.kind == NucleonKind::Proton)
            .count();
        assert_eq!(protons, 6);
        // first six entries are the protons
        for nucleon in &nucleons[..6] {
            assert_eq!(nucleon.kind, NucleonKind::Proton);
        }
        for nucleon in &nucleons[6..] {
            assert_eq!(nucleon.kind, NucleonKind::Neutron);
        }
        for nucleon in &nucleons {
            assert!((nucleon.center.length() - NUCLEUS_RADIUS).abs() < 1e-9);
            assert_eq!(nucleon.quarks.len(), QUARKS_PER_NUCLEON);
        }
        let quarks: usize = nucleons.iter().map(|n| n.quarks.len()).sum();
        assert_eq!(quarks, 36);
    }

    #[test]
    fn test_hydrogen_nucleus() {
        let nucleons = layout_nucleus(1, 0);
        assert_eq!(nucleons.len(), 1);
        assert_eq!(nucleons[0].kind, NucleonKind::Proton);
    }

    #[test]
    fn test_empty_nucleus() {
        assert!(layout_nucleus(0, 0).is_empty());
    }

    #[test]
    fn test_quarks_orbit_their_nucleon() {
        let nucleons = layout_nucleus(2, 2);
        for nucleon in &nucleons {
            for quark in &nucleon.quarks {
                let offset = Point3D::new(
                    quark.center.x - nucleon.center.x,
                    quark.center.y - nucleon.center.y,
                    quark.center.z - nucleon.center.z,
                );
                assert!((offset.length() - NUCLEON_RADIUS * 0.6).abs() < 1e-9);
                assert!((quark.radius - NUCLEON_RADIUS / 3.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(layout_nucleus(3, 4), layout_nucleus(3, 4));
    }
}
