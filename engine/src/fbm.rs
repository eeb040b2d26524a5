use crate::NoiseGenerator;

// Fractal Brownian motion: sums progressively finer octaves of any
// noise source and normalizes by the total amplitude, keeping the
// result roughly in [-1, 1]
pub struct Fbm<N> {
    source: N,
    octaves: usize,     // number of octaves to sum
    persistence: f64,   // amplitude scaling per octave
    lacunarity: f64,    // frequency scaling per octave
}

impl<N: NoiseGenerator> Fbm<N> {
    pub fn new(source: N, octaves: usize, persistence: f64, lacunarity: f64) -> Self {
        assert!(octaves > 0, "at least one octave required");
        Self {
            source,
            octaves,
            persistence,
            lacunarity,
        }
    }

    // Run the octave accumulation with a per-octave sampler closure
    fn accumulate(&self, mut octave: impl FnMut(&N, f64) -> f64) -> f64 {
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut total = 0.0;
        let mut max_amp = 0.0;

        for _ in 0..self.octaves {
            total += octave(&self.source, frequency) * amplitude;
            max_amp += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        // Normalize to [-1, +1] to keep the output consistent
        total / max_amp
    }
}

impl<N: NoiseGenerator> NoiseGenerator for Fbm<N> {
    fn get1(&self, x: f64) -> f64 {
        self.accumulate(|source, freq| source.get1(x * freq))
    }

    fn get2(&self, x: f64, y: f64) -> f64 {
        self.accumulate(|source, freq| source.get2(x * freq, y * freq))
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.accumulate(|source, freq| source.get3(x * freq, y * freq, z * freq))
    }
}

#[cfg(test)]
mod tests {
    use super::Fbm;
    use crate::{NoiseGenerator, Perlin1D, Perlin2D, Perlin3D};

    #[test]
    fn fbm_determinism() {
        let a = Fbm::new(Perlin2D::new(9), 4, 0.5, 2.0);
        let b = Fbm::new(Perlin2D::new(9), 4, 0.5, 2.0);
        for i in 0..50 {
            let x = i as f64 * 0.11;
            let y = i as f64 * 0.07;
            assert_eq!(a.get2(x, y), b.get2(x, y));
        }
    }

    #[test]
    fn single_octave_equals_base_sampler() {
        let base = Perlin3D::new(4);
        let fbm = Fbm::new(Perlin3D::new(4), 1, 0.5, 2.0);
        for i in 0..20 {
            let c = i as f64 * 0.39 + 0.2;
            assert_eq!(fbm.get3(c, c * 0.5, c * 0.25), base.sample(c, c * 0.5, c * 0.25));
        }
    }

    #[test]
    fn fbm_range() {
        let fbm = Fbm::new(Perlin2D::new(0), 6, 0.5, 2.0);
        for i in 0..50 {
            for j in 0..50 {
                let v = fbm.get2(i as f64 * 0.17, j as f64 * 0.13);
                assert!((-2.0..=2.0).contains(&v));
            }
        }
    }

    #[test]
    fn fbm_1d_signal() {
        let fbm = Fbm::new(Perlin1D::new(12), 3, 0.5, 2.0);
        let a = fbm.get1(1.4);
        let b = fbm.get1(1.4);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn fbm_forwards_arity_panic() {
        // a 1D source cannot serve 2D queries
        let fbm = Fbm::new(Perlin1D::new(0), 2, 0.5, 2.0);
        let _ = fbm.get2(1.0, 2.0);
    }

    #[test]
    #[should_panic]
    fn fbm_rejects_zero_octaves() {
        let _ = Fbm::new(Perlin2D::new(0), 0, 0.5, 2.0);
    }
}
