#![allow(dead_code)]

use std::f64::consts::PI;

use geo::{rotate::RotatePoint, Coordinate, Line, Rect};

use rand::Rng;
use rand_distr::Standard;

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coordinate {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

#[inline]
pub fn uniform_line<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Line<f64> {
    Line::new(uniform_point(rng, bounds), uniform_point(rng, bounds))
}

#[inline]
pub fn uniform_line_with_length<R: Rng>(rng: &mut R, bounds: Rect<f64>, length: f64) -> Line<f64> {
    let start = uniform_point(rng, bounds);
    let line = Line::new(start, start + (length, 0.).into());
    let angle = rng.sample::<f64, _>(Standard) * 2. * PI;
    line.rotate_around_point(angle, start.into())
}

/// A random walk of `points` vertices, each step at most `step` long
/// in either axis.
pub fn random_walk<R: Rng>(rng: &mut R, bounds: Rect<f64>, points: usize, step: f64) -> Vec<Coordinate<f64>> {
    let mut pt = uniform_point(rng, bounds);
    let mut coords = Vec::with_capacity(points);
    coords.push(pt);
    while coords.len() < points {
        let delta: [f64; 2] = rng.sample(Standard);
        pt = Coordinate {
            x: pt.x + (delta[0] - 0.5) * 2. * step,
            y: pt.y + (delta[1] - 0.5) * 2. * step,
        };
        coords.push(pt);
    }
    coords
}
