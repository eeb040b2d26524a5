use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

// Seeded lattice tables shared by the samplers. Each sampler draws its
// gradients first and its permutation second from one ChaCha8 stream,
// so a seed pins every byte of both tables.

pub(crate) const LATTICE: usize = 256;
// 256 entries plus a full duplicate and a 2-entry tail, so corner
// lookups that add 0 or 1 to a hashed index never wrap explicitly
pub(crate) const TABLE_LEN: usize = 2 * LATTICE + 2;

// Draws shorter than this are treated as degenerate before normalizing
const MIN_GRADIENT_LENGTH: f64 = 1e-6;
const RESAMPLE_ATTEMPTS: usize = 8;

// Copy entries [0, 258) into slots [256, 514)
fn duplicate<T: Copy>(table: &mut [T; TABLE_LEN]) {
    for i in 0..LATTICE + 2 {
        table[LATTICE + i] = table[i];
    }
}

// Identity table shuffled by the seeded stream, then duplicated.
// Shuffle: for each i, swap with a uniformly drawn slot.
pub(crate) fn permutation(rng: &mut ChaCha8Rng) -> [u16; TABLE_LEN] {
    let mut perm = [0u16; TABLE_LEN];
    for (i, slot) in perm.iter_mut().enumerate().take(LATTICE) {
        *slot = i as u16;
    }
    for i in 0..LATTICE {
        let j = rng.random_range(0..LATTICE);
        perm.swap(i, j);
    }
    duplicate(&mut perm);
    perm
}

// 1D gradients: uniform scalars in [-1, 1]
pub(crate) fn gradients_1d(rng: &mut ChaCha8Rng) -> [f64; TABLE_LEN] {
    let mut grads = [0.0f64; TABLE_LEN];
    for slot in grads.iter_mut().take(LATTICE) {
        *slot = rng.random_range(-1.0..=1.0);
    }
    duplicate(&mut grads);
    grads
}

// 2D gradients: unit vectors at uniform angles
pub(crate) fn gradients_2d(rng: &mut ChaCha8Rng) -> [DVec2; TABLE_LEN] {
    let mut grads = [DVec2::ZERO; TABLE_LEN];
    for slot in grads.iter_mut().take(LATTICE) {
        let angle = rng.random_range(0.0..TAU);
        *slot = DVec2::new(angle.cos(), angle.sin());
    }
    duplicate(&mut grads);
    grads
}

// 3D gradients: uniform cube samples normalized to the unit sphere.
// Degenerate draws are resampled from the same stream; after that the
// gradient pins to +X so no NaN can reach the table.
pub(crate) fn gradients_3d(rng: &mut ChaCha8Rng) -> [DVec3; TABLE_LEN] {
    let mut grads = [DVec3::ZERO; TABLE_LEN];
    for slot in grads.iter_mut().take(LATTICE) {
        *slot = unit_gradient_3d(rng);
    }
    duplicate(&mut grads);
    grads
}

fn unit_gradient_3d(rng: &mut ChaCha8Rng) -> DVec3 {
    for _ in 0..RESAMPLE_ATTEMPTS {
        let v = DVec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        let length = v.length();
        if length > MIN_GRADIENT_LENGTH {
            return v / length;
        }
    }
    DVec3::X
}

// Per-axis lattice decomposition of one sample coordinate
pub(crate) struct Axis {
    pub lower: usize,
    pub upper: usize,
    // fractional offset from the lower lattice point, in [0, 1)
    pub pre: f64,
    // offset from the upper lattice point, in [-1, 0)
    pub post: f64,
}

pub(crate) fn axis(coord: f64, period: Option<u32>) -> Axis {
    // Reducing mod the period before anything else makes tiling exact:
    // x and x + k*P decompose identically
    let c = match period {
        Some(p) => coord.rem_euclid(p as f64),
        None => coord,
    };
    let floor = c.floor();
    let lower = (floor as i64 & 255) as usize;
    Axis {
        lower,
        upper: (lower + 1) & 255,
        pre: c - floor,
        post: c - floor - 1.0,
    }
}
