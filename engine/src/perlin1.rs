use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::linear::Linear;
use crate::smoothing::Smoothing;
use crate::table::{self, TABLE_LEN};
use crate::{NoiseError, NoiseGenerator, check_finite};

// 1D gradient noise: a scalar gradient per lattice point, dotted with
// the offset to the sample and blended through a Linear cell
pub struct Perlin1D {
    perm: [u16; TABLE_LEN],
    grads: [f64; TABLE_LEN],
    smoothing: Smoothing,
    period: Option<u32>,
}

impl Perlin1D {
    // Deterministic: the seed fixes both tables and every sample
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        // gradients before the shuffle; the stream order is part of
        // the determinism contract
        let grads = table::gradients_1d(&mut rng);
        let perm = table::permutation(&mut rng);
        Self {
            perm,
            grads,
            smoothing: Smoothing::default(),
            period: None,
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

    // Tile exactly every `period` lattice units
    pub fn with_period(mut self, period: u32) -> Self {
        assert!(period > 0, "period must be positive");
        self.period = Some(period);
        self
    }

    pub fn try_sample(&self, x: f64) -> Result<f64, NoiseError> {
        let x = check_finite('x', x)?;
        let ax = table::axis(x, self.period);

        let g0 = self.grads[self.perm[ax.lower] as usize];
        let g1 = self.grads[self.perm[ax.upper] as usize];

        // contribution per lattice point = gradient * offset
        let cell = Linear::new(g0 * ax.pre, g1 * ax.post).with_smoothing(self.smoothing);
        Ok(cell.interpolate(ax.pre))
    }

    // Noise at x, nominally in [-1, 1] (overshoot is not suppressed).
    // Panics on non-finite input; use `try_sample` to handle it.
    pub fn sample(&self, x: f64) -> f64 {
        match self.try_sample(x) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    // Same noise remapped to [0, 1]
    pub fn positive_sample(&self, x: f64) -> f64 {
        self.sample(x) * 0.5 + 0.5
    }
}

impl NoiseGenerator for Perlin1D {
    fn get1(&self, x: f64) -> f64 {
        self.sample(x)
    }
}

#[cfg(test)]
mod tests {
    use super::Perlin1D;
    use crate::NoiseGenerator;
    use crate::smoothing::Smoothing;

    #[test]
    fn perlin1_determinism() {
        let a = Perlin1D::new(1234);
        let b = Perlin1D::new(1234);
        for i in 0..100 {
            let x = i as f64 * 0.37 - 18.0;
            assert_eq!(a.sample(x), b.sample(x));
        }
    }

    #[test]
    fn perlin1_seeds_differ() {
        let a = Perlin1D::new(1);
        let b = Perlin1D::new(2);
        let spread: f64 = (0..64)
            .map(|i| (a.sample(i as f64 + 0.5) - b.sample(i as f64 + 0.5)).abs())
            .sum();
        assert!(spread > 0.0);
    }

    #[test]
    fn perlin1_zero_at_lattice_points() {
        // every contribution is gradient * 0 at an integer coordinate
        let p = Perlin1D::new(99);
        for x in -8..8 {
            assert_eq!(p.sample(x as f64), 0.0);
        }
    }

    #[test]
    fn perlin1_range() {
        let p = Perlin1D::new(0);
        for i in 0..10_000 {
            let x = i as f64 * 0.173 - 860.0;
            let v = p.sample(x);
            assert!((-2.0..=2.0).contains(&v), "value {} out of range at {}", v, x);
        }
    }

    #[test]
    fn perlin1_continuity_across_lattice_boundary() {
        let p = Perlin1D::new(5);
        for x in [2.0, 7.0, -3.0] {
            let eps = 1e-7;
            let below = p.sample(x - eps);
            let above = p.sample(x + eps);
            assert!((below - above).abs() < 1e-4);
        }
    }

    #[test]
    fn perlin1_exact_tiling() {
        let p = Perlin1D::new(77).with_period(16);
        // dyadic fractions keep the reduction exact
        for i in 0..64 {
            let x = i as f64 * 0.25;
            assert_eq!(p.sample(x), p.sample(x + 16.0));
            assert_eq!(p.sample(x), p.sample(x - 32.0));
        }
    }

    #[test]
    fn perlin1_positive_sample_range() {
        let p = Perlin1D::new(3);
        for i in 0..1000 {
            let v = p.positive_sample(i as f64 * 0.31);
            assert!((-0.5..=1.5).contains(&v));
            assert_eq!(v, p.sample(i as f64 * 0.31) * 0.5 + 0.5);
        }
    }

    #[test]
    fn perlin1_rejects_non_finite() {
        let p = Perlin1D::new(0);
        assert!(p.try_sample(f64::NAN).is_err());
        assert!(p.try_sample(f64::NEG_INFINITY).is_err());
    }

    #[test]
    #[should_panic]
    fn perlin1_sample_panics_on_nan() {
        let p = Perlin1D::new(0);
        let _ = p.sample(f64::NAN);
    }

    #[test]
    #[should_panic]
    fn perlin1_get2_panic() {
        let p = Perlin1D::new(0);
        // Calling get2 on a 1D-only generator should panic
        let _ = p.get2(1.0, 2.0);
    }

    #[test]
    fn perlin1_fade_curve_still_deterministic() {
        let a = Perlin1D::new(8).with_smoothing(Smoothing::PerlinFade);
        let b = Perlin1D::new(8).with_smoothing(Smoothing::PerlinFade);
        assert_eq!(a.sample(4.6), b.sample(4.6));
    }
}
