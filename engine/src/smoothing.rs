use glam::{DVec2, DVec3};

// Easing polynomials applied to the interpolation parameter so the
// blend has no derivative kink at lattice boundaries. Both curves are
// evaluated as-is for any finite input, never clamped: out-of-range
// parameters are meaningful to extrapolating callers.

// Cubic smoothstep: t^2 * (3 - 2t)
// Zero first derivative at t=0 and t=1
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

// Fade function as defined by Ken Perlin: 6t^5 - 15t^4 + 10t^3
// Steeper than smoothstep, with zero first AND second derivatives
// at t=0 and t=1
#[inline]
pub fn perlin_fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

// Component-wise vector overloads

#[inline]
pub fn smoothstep2(t: DVec2) -> DVec2 {
    DVec2::new(smoothstep(t.x), smoothstep(t.y))
}

#[inline]
pub fn smoothstep3(t: DVec3) -> DVec3 {
    DVec3::new(smoothstep(t.x), smoothstep(t.y), smoothstep(t.z))
}

#[inline]
pub fn perlin_fade2(t: DVec2) -> DVec2 {
    DVec2::new(perlin_fade(t.x), perlin_fade(t.y))
}

#[inline]
pub fn perlin_fade3(t: DVec3) -> DVec3 {
    DVec3::new(perlin_fade(t.x), perlin_fade(t.y), perlin_fade(t.z))
}

// Which easing curve an interpolation cell runs the blend parameter
// through. Neither curve is canonical; callers pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Smoothing {
    // Blend on the raw parameter (linear, extrapolates cleanly)
    None,
    #[default]
    Smoothstep,
    PerlinFade,
}

impl Smoothing {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Smoothing::None => t,
            Smoothing::Smoothstep => smoothstep(t),
            Smoothing::PerlinFade => perlin_fade(t),
        }
    }

    #[inline]
    pub fn apply2(self, t: DVec2) -> DVec2 {
        match self {
            Smoothing::None => t,
            Smoothing::Smoothstep => smoothstep2(t),
            Smoothing::PerlinFade => perlin_fade2(t),
        }
    }

    #[inline]
    pub fn apply3(self, t: DVec3) -> DVec3 {
        match self {
            Smoothing::None => t,
            Smoothing::Smoothstep => smoothstep3(t),
            Smoothing::PerlinFade => perlin_fade3(t),
        }
    }
}
