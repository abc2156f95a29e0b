//! Geometric utility functions for distance calculations and arena bounds.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f32::consts::TAU;

/// Euclidean distance between two 2D positions.
pub fn point_distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1]))
}

/// Clamps both coordinates of a position into `[lo, hi]`.
pub fn clamp_mut(v: &mut Array1<f32>, lo: f32, hi: f32) {
    v.mapv_inplace(|c| c.clamp(lo, hi));
}

/// Vector of length `radius` pointing along `angle`.
pub fn polar_offset(angle: f32, radius: f32) -> Array1<f32> {
    Array1::from_vec(vec![angle.cos() * radius, angle.sin() * radius])
}

/// Maps an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Uniform heading in `[0, 2π)`.
pub fn random_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(0.0..TAU)
}

/// Zero-mean Gaussian sample. A zero or invalid deviation yields 0.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, std_dev: f32) -> f32 {
    match Normal::new(0.0_f32, std_dev) {
        Ok(normal) if std_dev > 0.0 => normal.sample(rng),
        _ => 0.0,
    }
}
