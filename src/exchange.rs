//! Exchange-particle emitters: gluons between quark pairs inside a nucleon,
//! mesons between nucleon pairs across the nucleus.
//!
//! Emission is an independent Bernoulli trial per pair per frame, so exact
//! visual state is never reproducible across runs; the RNG is injected so
//! tests can pin the statistics down with a seed.

use crate::geometry::Point3D;
use crate::nucleus::{Nucleon, ANTIQUARK_COLORS, GLUON_COLORS, QUARK_COLORS};
use crate::viewer::{SphereSpec, Viewer};
use rand::Rng;

pub const GLUON_RADIUS: f64 = 0.01;
pub const GLUON_SPEED: f64 = 0.2;
pub const GLUON_PROBABILITY: f64 = 0.3;

pub const MESON_RADIUS: f64 = 0.02;
pub const MESON_SPEED: f64 = 0.1;
pub const MESON_PROBABILITY: f64 = 0.2;

/// Position oscillating between `start` and `end`: `(sin(t * speed) + 1) / 2`
/// maps time onto a [0, 1] interpolation parameter.
fn oscillating_position(start: &Point3D, end: &Point3D, time: f64, speed: f64) -> Point3D {
    let progress = ((time * speed).sin() + 1.0) / 2.0;
    Point3D::lerp(start, end, progress)
}

/// Rolls each quark pair of `nucleon` at [`GLUON_PROBABILITY`] and emits a
/// gluon sphere partway between the pair for every hit.
pub fn emit_gluon_exchanges<R: Rng + ?Sized>(
    viewer: &mut dyn Viewer,
    nucleon: &Nucleon,
    time: f64,
    rng: &mut R,
) {
    for i in 0..nucleon.quarks.len() {
        for j in (i + 1)..nucleon.quarks.len() {
            if rng.gen::<f64>() < GLUON_PROBABILITY {
                let center = oscillating_position(
                    &nucleon.quarks[i].center,
                    &nucleon.quarks[j].center,
                    time,
                    GLUON_SPEED,
                );
                let color = GLUON_COLORS[rng.gen_range(0..GLUON_COLORS.len())];
                viewer.add_sphere(SphereSpec {
                    center,
                    radius: GLUON_RADIUS,
                    color,
                    opacity: 1.0,
                });
            }
        }
    }
}

/// Rolls each nucleon pair at [`MESON_PROBABILITY`] and emits a meson sphere
/// between the pair for every hit, colored as a quark/antiquark blend.
pub fn emit_meson_exchanges<R: Rng + ?Sized>(
    viewer: &mut dyn Viewer,
    nucleons: &[Nucleon],
    time: f64,
    rng: &mut R,
) {
    for i in 0..nucleons.len() {
        for j in (i + 1)..nucleons.len() {
            if rng.gen::<f64>() < MESON_PROBABILITY {
                let center = oscillating_position(
                    &nucleons[i].center,
                    &nucleons[j].center,
                    time,
                    MESON_SPEED,
                );
                let k = rng.gen_range(0..QUARK_COLORS.len());
                let color = QUARK_COLORS[k].blend(&ANTIQUARK_COLORS[k]);
                viewer.add_sphere(SphereSpec {
                    center,
                    radius: MESON_RADIUS,
                    color,
                    opacity: 1.0,
                });
            }
        }
    }
}
