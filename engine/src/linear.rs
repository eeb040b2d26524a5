use crate::smoothing::Smoothing;
use crate::{Interpolatable, lerp};

// Two corner values blended along one axis
// Index convention: 0 = start (coordinate 0.0), 1 = end (coordinate 1.0)
#[derive(Debug, Clone, Copy)]
pub struct Linear<T> {
    corners: [T; 2],
    smoothing: Smoothing,
}

impl<T: Interpolatable> Linear<T> {
    pub fn new(start: T, end: T) -> Self {
        Self {
            corners: [start, end],
            smoothing: Smoothing::default(),
        }
    }

    // Repeat one value into both corners
    pub fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    // Invoke `corner(index, coordinate)` once per corner
    pub fn from_fn(mut corner: impl FnMut(usize, f64) -> T) -> Self {
        Self::new(corner(0, 0.0), corner(1, 1.0))
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn start(&self) -> T {
        self.corners[0]
    }

    pub fn end(&self) -> T {
        self.corners[1]
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

    // Blend the two corners at `t`. The smoothing curve runs first;
    // neither the parameter nor the result is clamped, so coordinates
    // outside [0,1] extrapolate.
    pub fn interpolate(&self, t: f64) -> T {
        let t = self.smoothing.apply(t);
        lerp(self.corners[0], self.corners[1], t)
    }
}
