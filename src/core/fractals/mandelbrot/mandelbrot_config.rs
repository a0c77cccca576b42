use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// Iteration budget for final-quality renders.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub view: ViewState,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            view: ViewState::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
        }
    }
}

impl MandelbrotConfig {
    /// Builds the viewport for a canvas of the given size at the current view.
    pub fn build_viewport(&self, canvas_width: u32, canvas_height: u32) -> Result<Viewport, ViewportError> {
        Viewport::new(canvas_width, canvas_height, self.view.center, self.view.zoom)
    }

    /// Returns to the default center and zoom. Budget and palette are kept.
    pub fn reset_view(&mut self) {
        self.view = ViewState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_default_config() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.colour_map_kind, MandelbrotColourMapKinds::DuskGradient);
        assert_eq!(config.view, ViewState::default());
    }

    #[test]
    fn test_build_viewport_uses_view() {
        let mut config = MandelbrotConfig::default();
        config.view.set_view(Complex::new(0.1, 0.2), 0.01);

        let viewport = config.build_viewport(300, 200).unwrap();

        assert_eq!(viewport.center(), Complex::new(0.1, 0.2));
        assert_eq!(viewport.zoom(), 0.01);
        assert_eq!(viewport.pixel_rect().width(), 300);
        assert_eq!(viewport.pixel_rect().height(), 200);
    }

    #[test]
    fn test_build_viewport_rejects_empty_canvas() {
        let config = MandelbrotConfig::default();

        assert!(matches!(
            config.build_viewport(0, 200),
            Err(ViewportError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_reset_view_only_touches_view() {
        let mut config = MandelbrotConfig::default();
        config.view.set_view(Complex::new(0.3, 0.3), 1e-6);
        config.max_iterations = 50;
        config.colour_map_kind = MandelbrotColourMapKinds::SlateGradient;

        config.reset_view();

        assert_eq!(config.view, ViewState::default());
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.colour_map_kind, MandelbrotColourMapKinds::SlateGradient);
    }
}
