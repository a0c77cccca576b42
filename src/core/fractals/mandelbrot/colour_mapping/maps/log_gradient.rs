use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::BOUNDED;

/// Colour used for points that never escaped.
pub const BACKGROUND: Colour = Colour::BLACK;

/// Two-colour gradient indexed by the logarithm of the escape count.
///
/// The logarithm spreads the palette over the low counts, which is where most
/// of the detail around the set lives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogGradient {
    start: Colour,
    end: Colour,
    max_iterations: u32,
}

impl LogGradient {
    #[must_use]
    pub const fn new(start: Colour, end: Colour, max_iterations: u32) -> Self {
        Self {
            start,
            end,
            max_iterations,
        }
    }

    /// Position in `[0, 1]` for a non-bounded escape count:
    /// `ln(iterations) / ln(max_iterations - 1)`.
    ///
    /// Budgets of two or less leave no room for a gradient and map to 0.
    #[must_use]
    pub fn position(&self, iterations: u32) -> f64 {
        let denominator = f64::from(self.max_iterations.saturating_sub(1)).ln();

        if !(denominator > 0.0) || iterations == 0 {
            return 0.0;
        }

        (f64::from(iterations).ln() / denominator).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn colour(&self, iterations: u32) -> Colour {
        if iterations == BOUNDED {
            return BACKGROUND;
        }

        self.start.lerp(self.end, self.position(iterations))
    }

    #[must_use]
    pub fn start(&self) -> Colour {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Colour {
        self.end
    }
}
