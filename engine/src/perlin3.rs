use glam::DVec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::smoothing::Smoothing;
use crate::table::{self, TABLE_LEN};
use crate::trilinear::Trilinear;
use crate::{NoiseError, NoiseGenerator, check_finite};

// 3D gradient noise: a unit-sphere gradient per lattice point, one
// dot-product contribution per cube corner, blended through a
// Trilinear cell
pub struct Perlin3D {
    perm: [u16; TABLE_LEN],
    grads: [DVec3; TABLE_LEN],
    smoothing: Smoothing,
    period_x: Option<u32>,
    period_y: Option<u32>,
    period_z: Option<u32>,
}

impl Perlin3D {
    // Deterministic: the seed fixes both tables and every sample
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grads = table::gradients_3d(&mut rng);
        let perm = table::permutation(&mut rng);
        Self {
            perm,
            grads,
            smoothing: Smoothing::default(),
            period_x: None,
            period_y: None,
            period_z: None,
        }
    }

    // Fresh entropy; use `new` when output must reproduce
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    // Tile exactly every (period_x, period_y, period_z) lattice units
    pub fn with_periods(mut self, period_x: u32, period_y: u32, period_z: u32) -> Self {
        assert!(
            period_x > 0 && period_y > 0 && period_z > 0,
            "periods must be positive"
        );
        self.period_x = Some(period_x);
        self.period_y = Some(period_y);
        self.period_z = Some(period_z);
        self
    }

    pub fn try_sample(&self, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let x = check_finite('x', x)?;
        let y = check_finite('y', y)?;
        let z = check_finite('z', z)?;
        let ax = table::axis(x, self.period_x);
        let ay = table::axis(y, self.period_y);
        let az = table::axis(z, self.period_z);

        // Hash the eight cube corners through the doubled table
        let px0 = self.perm[ax.lower] as usize;
        let px1 = self.perm[ax.upper] as usize;
        let p00 = self.perm[px0 + ay.lower] as usize;
        let p01 = self.perm[px0 + ay.upper] as usize;
        let p10 = self.perm[px1 + ay.lower] as usize;
        let p11 = self.perm[px1 + ay.upper] as usize;

        let h000 = self.perm[p00 + az.lower] as usize;
        let h100 = self.perm[p10 + az.lower] as usize;
        let h010 = self.perm[p01 + az.lower] as usize;
        let h110 = self.perm[p11 + az.lower] as usize;
        let h001 = self.perm[p00 + az.upper] as usize;
        let h101 = self.perm[p10 + az.upper] as usize;
        let h011 = self.perm[p01 + az.upper] as usize;
        let h111 = self.perm[p11 + az.upper] as usize;

        // One gradient dot offset per corner, in index order x + 2y + 4z
        let cell = Trilinear::new([
            self.grads[h000].dot(DVec3::new(ax.pre, ay.pre, az.pre)),
            self.grads[h100].dot(DVec3::new(ax.post, ay.pre, az.pre)),
            self.grads[h010].dot(DVec3::new(ax.pre, ay.post, az.pre)),
            self.grads[h110].dot(DVec3::new(ax.post, ay.post, az.pre)),
            self.grads[h001].dot(DVec3::new(ax.pre, ay.pre, az.post)),
            self.grads[h101].dot(DVec3::new(ax.post, ay.pre, az.post)),
            self.grads[h011].dot(DVec3::new(ax.pre, ay.post, az.post)),
            self.grads[h111].dot(DVec3::new(ax.post, ay.post, az.post)),
        ])
        .with_smoothing(self.smoothing);

        Ok(cell.interpolate(DVec3::new(ax.pre, ay.pre, az.pre)))
    }

    // Noise at (x, y, z), nominally in [-1, 1] (overshoot is not
    // suppressed). Panics on non-finite input; use `try_sample` to
    // handle it.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        match self.try_sample(x, y, z) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    // Same noise remapped to [0, 1]
    pub fn positive_sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample(x, y, z) * 0.5 + 0.5
    }
}

impl NoiseGenerator for Perlin3D {
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample(x, y, z)
    }
}
