use glam::DVec3;

use crate::smoothing::Smoothing;
use crate::{Interpolatable, lerp};

// Eight corner values blended over the unit cube
// Index convention: index = x + 2y + 4z, front = z 0, back = z 1
//   0 = (0,0,0) bottom-left-front    1 = (1,0,0) bottom-right-front
//   2 = (0,1,0) top-left-front       3 = (1,1,0) top-right-front
//   4 = (0,0,1) bottom-left-back     5 = (1,0,1) bottom-right-back
//   6 = (0,1,1) top-left-back        7 = (1,1,1) top-right-back
#[derive(Debug, Clone, Copy)]
pub struct Trilinear<T> {
    corners: [T; 8],
    smoothing: Smoothing,
}

impl<T: Interpolatable> Trilinear<T> {
    pub fn new(corners: [T; 8]) -> Self {
        Self {
            corners,
            smoothing: Smoothing::default(),
        }
    }

    // Repeat one value into all eight corners
    pub fn splat(value: T) -> Self {
        Self::new([value; 8])
    }

    // Invoke `corner(index, vertex)` once per corner, where `vertex`
    // is the corner's unit-cube coordinate under the index convention
    pub fn from_fn(mut corner: impl FnMut(usize, DVec3) -> T) -> Self {
        Self::new(std::array::from_fn(|i| corner(i, Self::vertex(i))))
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    // Unit-cube vertex for a corner index
    pub fn vertex(index: usize) -> DVec3 {
        DVec3::new(
            (index & 1) as f64,
            ((index >> 1) & 1) as f64,
            ((index >> 2) & 1) as f64,
        )
    }

    // Named accessors are aliases onto the index convention above
    pub fn bottom_left_front(&self) -> T {
        self.corners[0]
    }

    pub fn bottom_right_front(&self) -> T {
        self.corners[1]
    }

    pub fn top_left_front(&self) -> T {
        self.corners[2]
    }

    pub fn top_right_front(&self) -> T {
        self.corners[3]
    }

    pub fn bottom_left_back(&self) -> T {
        self.corners[4]
    }

    pub fn bottom_right_back(&self) -> T {
        self.corners[5]
    }

    pub fn top_left_back(&self) -> T {
        self.corners[6]
    }

    pub fn top_right_back(&self) -> T {
        self.corners[7]
    }

    // Out-of-range reads yield None rather than a bounds panic
    pub fn get(&self, index: usize) -> Option<&T> {
        self.corners.get(index)
    }

    // Out-of-range writes are ignored
    pub fn set(&mut self, index: usize, value: T) {
        if let Some(slot) = self.corners.get_mut(index) {
            *slot = value;
        }
    }

    // Blend the corners at `at`, collapsing x, then y, then z.
    // Smoothing runs per axis component; nothing is clamped.
    pub fn interpolate(&self, at: DVec3) -> T {
        let t = self.smoothing.apply3(at);
        let c = &self.corners;

        let bottom_front = lerp(c[0], c[1], t.x);
        let top_front = lerp(c[2], c[3], t.x);
        let bottom_back = lerp(c[4], c[5], t.x);
        let top_back = lerp(c[6], c[7], t.x);

        let front = lerp(bottom_front, top_front, t.y);
        let back = lerp(bottom_back, top_back, t.y);

        lerp(front, back, t.z)
    }
}
