use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bilinear::Bilinear;
use crate::smoothing::Smoothing;
use crate::table::{self, TABLE_LEN};
use crate::{NoiseError, NoiseGenerator, check_finite};

// 2D gradient noise: a unit-circle gradient per lattice point, one
// dot-product contribution per square corner, blended through a
// Bilinear cell
pub struct Perlin2D {
    perm: [u16; TABLE_LEN],
    grads: [DVec2; TABLE_LEN],
    smoothing: Smoothing,
    period_x: Option<u32>,
    period_y: Option<u32>,
}

impl Perlin2D {
    // Deterministic: the seed fixes both tables and every sample
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grads = table::gradients_2d(&mut rng);
        let perm = table::permutation(&mut rng);
        Self {
            perm,
            grads,
            smoothing: Smoothing::default(),
            period_x: None,
            period_y: None,
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

    // Tile exactly every (period_x, period_y) lattice units
    pub fn with_periods(mut self, period_x: u32, period_y: u32) -> Self {
        assert!(period_x > 0 && period_y > 0, "periods must be positive");
        self.period_x = Some(period_x);
        self.period_y = Some(period_y);
        self
    }

    pub fn try_sample(&self, x: f64, y: f64) -> Result<f64, NoiseError> {
        let x = check_finite('x', x)?;
        let y = check_finite('y', y)?;
        let ax = table::axis(x, self.period_x);
        let ay = table::axis(y, self.period_y);

        // Hash the four square corners through the doubled table
        let px0 = self.perm[ax.lower] as usize;
        let px1 = self.perm[ax.upper] as usize;
        let h00 = self.perm[px0 + ay.lower] as usize;
        let h10 = self.perm[px1 + ay.lower] as usize;
        let h01 = self.perm[px0 + ay.upper] as usize;
        let h11 = self.perm[px1 + ay.upper] as usize;

        // One gradient dot offset per corner, in index order x + 2y
        let cell = Bilinear::new([
            self.grads[h00].dot(DVec2::new(ax.pre, ay.pre)),
            self.grads[h10].dot(DVec2::new(ax.post, ay.pre)),
            self.grads[h01].dot(DVec2::new(ax.pre, ay.post)),
            self.grads[h11].dot(DVec2::new(ax.post, ay.post)),
        ])
        .with_smoothing(self.smoothing);

        Ok(cell.interpolate(DVec2::new(ax.pre, ay.pre)))
    }

    // Noise at (x, y), nominally in [-1, 1] (overshoot is not
    // suppressed). Panics on non-finite input; use `try_sample` to
    // handle it.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        match self.try_sample(x, y) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    // Same noise remapped to [0, 1]
    pub fn positive_sample(&self, x: f64, y: f64) -> f64 {
        self.sample(x, y) * 0.5 + 0.5
    }

    // Bake a size*size grid sampled over [0, scale) on both axes
    pub fn generate(&self, size: usize, scale: f64) -> Vec<Vec<f32>> {
        let mut data = vec![vec![0.0; size]; size];
        for (yi, row) in data.iter_mut().enumerate() {
            for (xi, value) in row.iter_mut().enumerate() {
                let x = xi as f64 * scale / size as f64;
                let y = yi as f64 * scale / size as f64;
                *value = self.sample(x, y) as f32;
            }
        }
        data
    }
}

impl NoiseGenerator for Perlin2D {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.sample(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::Perlin2D;
    use crate::NoiseGenerator;

    #[test]
    fn perlin2_determinism() {
        let a = Perlin2D::new(1234);
        let b = Perlin2D::new(1234);
        for i in 0..100 {
            let x = i as f64 * 0.29 - 13.0;
            let y = i as f64 * 0.41 + 7.0;
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn perlin2_zero_at_lattice_points() {
        let p = Perlin2D::new(42);
        for y in -4..4 {
            for x in -4..4 {
                assert_eq!(p.sample(x as f64, y as f64), 0.0);
            }
        }
    }

    #[test]
    fn perlin2_range() {
        let p = Perlin2D::new(0);
        for i in 0..100 {
            for j in 0..100 {
                let x = i as f64 * 0.173 - 8.0;
                let y = j as f64 * 0.219 - 11.0;
                let v = p.sample(x, y);
                assert!(
                    (-2.0..=2.0).contains(&v),
                    "value {} out of range at ({}, {})",
                    v,
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn perlin2_continuity_across_lattice_boundary() {
        let p = Perlin2D::new(5);
        let eps = 1e-7;
        for &(x, y) in &[(3.0, 0.4), (0.6, -2.0), (5.0, 5.0)] {
            let below = p.sample(x - eps, y);
            let above = p.sample(x + eps, y);
            assert!((below - above).abs() < 1e-4);
        }
    }

    #[test]
    fn perlin2_exact_tiling() {
        let p = Perlin2D::new(2025).with_periods(8, 32);
        for i in 0..32 {
            let x = i as f64 * 0.75;
            let y = i as f64 * 1.25;
            assert_eq!(p.sample(x, y), p.sample(x + 8.0, y));
            assert_eq!(p.sample(x, y), p.sample(x, y + 64.0));
            assert_eq!(p.sample(x, y), p.sample(x - 16.0, y - 32.0));
        }
    }

    #[test]
    fn perlin2_unperiodic_axes_stay_independent() {
        let p = Perlin2D::new(6);
        // without periods, shifting by 8 should (almost surely) change
        // the sample somewhere
        let spread: f64 = (0..32)
            .map(|i| {
                let x = i as f64 * 0.4 + 0.1;
                (p.sample(x, 0.3) - p.sample(x + 8.0, 0.3)).abs()
            })
            .sum();
        assert!(spread > 0.0);
    }

    #[test]
    fn perlin2_positive_sample_matches_remap() {
        let p = Perlin2D::new(11);
        assert_eq!(p.positive_sample(3.7, 1.2), p.sample(3.7, 1.2) * 0.5 + 0.5);
    }

    #[test]
    fn perlin2_generate_dimensions() {
        let p = Perlin2D::new(1);
        let grid = p.generate(64, 8.0);
        assert_eq!(grid.len(), 64);
        assert_eq!(grid[0].len(), 64);
    }

    #[test]
    fn perlin2_rejects_non_finite() {
        let p = Perlin2D::new(0);
        assert!(p.try_sample(f64::NAN, 0.0).is_err());
        assert!(p.try_sample(0.0, f64::INFINITY).is_err());
    }

    #[test]
    #[should_panic]
    fn perlin2_sample_panics_on_nan() {
        let p = Perlin2D::new(0);
        let _ = p.sample(0.0, f64::NAN);
    }

    #[test]
    #[should_panic]
    fn perlin2_get3_panic() {
        let p = Perlin2D::new(0);
        // Calling get3 on a 2D-only generator should panic
        let _ = p.get3(1.0, 2.0, 3.0);
    }
}
