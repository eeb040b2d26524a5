use glam::DVec2;

use crate::smoothing::Smoothing;
use crate::{Interpolatable, lerp};

// Four corner values blended over the unit square
// Index convention: index = x + 2y
//   0 = (0,0) bottom-left   1 = (1,0) bottom-right
//   2 = (0,1) top-left      3 = (1,1) top-right
#[derive(Debug, Clone, Copy)]
pub struct Bilinear<T> {
    corners: [T; 4],
    smoothing: Smoothing,
}

impl<T: Interpolatable> Bilinear<T> {
    pub fn new(corners: [T; 4]) -> Self {
        Self {
            corners,
            smoothing: Smoothing::default(),
        }
    }

    // Repeat one value into all four corners
    pub fn splat(value: T) -> Self {
        Self::new([value; 4])
    }

    // Invoke `corner(index, vertex)` once per corner, where `vertex`
    // is the corner's unit-square coordinate under the index convention
    pub fn from_fn(mut corner: impl FnMut(usize, DVec2) -> T) -> Self {
        Self::new(std::array::from_fn(|i| corner(i, Self::vertex(i))))
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    // Unit-square vertex for a corner index
    pub fn vertex(index: usize) -> DVec2 {
        DVec2::new((index & 1) as f64, ((index >> 1) & 1) as f64)
    }

    // Named accessors are aliases onto the index convention above
    pub fn bottom_left(&self) -> T {
        self.corners[0]
    }

    pub fn bottom_right(&self) -> T {
        self.corners[1]
    }

    pub fn top_left(&self) -> T {
        self.corners[2]
    }

    pub fn top_right(&self) -> T {
        self.corners[3]
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

    // Blend the corners at `at`, collapsing x first, then y.
    // Smoothing runs per axis component; nothing is clamped.
    pub fn interpolate(&self, at: DVec2) -> T {
        let t = self.smoothing.apply2(at);
        let bottom = lerp(self.corners[0], self.corners[1], t.x);
        let top = lerp(self.corners[2], self.corners[3], t.x);
        lerp(bottom, top, t.y)
    }
}
