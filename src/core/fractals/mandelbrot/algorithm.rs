use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Returned by [`escape_time`] when the orbit never left the escape radius.
pub const BOUNDED: u32 = 0;

/// |z|² beyond which an orbit has escaped (radius 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates z ← z² + c from z = 0 and counts the steps until |z| > 2.
///
/// Returns [`BOUNDED`] when the budget runs out first, including when the
/// orbit escapes on the very last permitted step. A zero budget is always
/// bounded.
#[must_use]
#[inline]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while iteration < max_iterations && z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
        z = z * z + c;
        iteration += 1;
    }

    if iteration == max_iterations {
        BOUNDED
    } else {
        iteration
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, pixel: Point) -> Self::Success {
        escape_time(self.viewport.pixel_to_complex(pixel), self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, max_iterations: u32) -> Self {
        Self {
            viewport,
            max_iterations,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
