// engine holds the seeded gradient-noise samplers and the
// interpolation cells they blend through
pub mod bilinear;
pub mod fbm;
pub mod linear;
pub mod perlin1;
pub mod perlin2;
pub mod perlin3;
pub mod smoothing;
pub mod trilinear;
pub mod utils;

mod table;

pub use bilinear::Bilinear;
pub use fbm::Fbm;
pub use linear::Linear;
pub use perlin1::Perlin1D;
pub use perlin2::Perlin2D;
pub use perlin3::Perlin3D;
pub use smoothing::{Smoothing, perlin_fade, smoothstep};
pub use trilinear::Trilinear;
pub use utils::flatten2;

use glam::{DVec2, DVec3, Vec2, Vec3};
use thiserror::Error;

// noise generator that can sample 1D, 2D or 3D points
// 1D‐only implementations override `get1(...)`.
// 2D‐only implementations override `get2(...)`.
// 3D‐only implementations override `get3(...)`.
pub trait NoiseGenerator {
    // Sample 1D noise at x.
    fn get1(&self, _x: f64) -> f64 {
        panic!("get1 not implemented for this generator");
    }

    // Sample 2D noise at (x, y).
    fn get2(&self, _x: f64, _y: f64) -> f64 {
        panic!("get2 not implemented for this generator");
    }

    // Sample 3D noise at (x, y, z).
    fn get3(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        panic!("get3 not implemented for this generator");
    }
}

// Sampling rejects malformed coordinates up front: a NaN that slipped
// into the lerp cascade would poison every downstream value unnoticed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NoiseError {
    #[error("non-finite coordinate {value} on axis {axis}")]
    NonFiniteCoordinate { axis: char, value: f64 },
}

// Capability set for anything the interpolation cells can blend:
// addition, subtraction and scaling by a scalar. Implemented explicitly
// per type so the cells state exactly what they require.
pub trait Interpolatable: Copy {
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn scale(self, factor: f64) -> Self;
}

impl Interpolatable for f64 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }
    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

impl Interpolatable for f32 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }
    fn scale(self, factor: f64) -> Self {
        self * factor as f32
    }
}

impl Interpolatable for DVec2 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }
    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

impl Interpolatable for DVec3 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }
    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

impl Interpolatable for Vec2 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }
    fn scale(self, factor: f64) -> Self {
        self * factor as f32
    }
}

impl Interpolatable for Vec3 {
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }
    fn scale(self, factor: f64) -> Self {
        self * factor as f32
    }
}

// Linear interpolation between two blendable values
#[inline]
pub fn lerp<T: Interpolatable>(a: T, b: T, t: f64) -> T {
    a.add(b.sub(a).scale(t))
}

pub(crate) fn check_finite(axis: char, value: f64) -> Result<f64, NoiseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NoiseError::NonFiniteCoordinate { axis, value })
    }
}
