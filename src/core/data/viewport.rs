use std::error::Error;
use std::fmt;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
    InvalidZoom { zoom: f64 },
    NonFiniteCenter { center: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(f, "viewport {}x{} is too large to render", width, height)
            }
            Self::InvalidZoom { zoom } => {
                write!(f, "viewport zoom must be positive and finite: {}", zoom)
            }
            Self::NonFiniteCenter { center } => {
                write!(
                    f,
                    "viewport center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

impl From<PixelRectError> for ViewportError {
    fn from(err: PixelRectError) -> Self {
        match err {
            PixelRectError::InvalidSize { width, height } => Self::InvalidSize { width, height },
            PixelRectError::TooLarge { width, height } => Self::TooLarge { width, height },
        }
    }
}

/// The region of the complex plane being rendered.
///
/// `zoom` is plane units per pixel, so a smaller value is a more magnified
/// view. The center of the plane region sits at the center of the pixel grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pixel_rect: PixelRect,
    center: Complex,
    zoom: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32, center: Complex, zoom: f64) -> Result<Self, ViewportError> {
        let pixel_rect = PixelRect::new(width, height)?;

        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCenter { center });
        }

        Ok(Self {
            pixel_rect,
            center,
            zoom,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Maps a pixel to its point on the complex plane.
    ///
    /// Pixels outside the rect are extrapolated along the same grid.
    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        let half_width = f64::from(self.pixel_rect.width()) / 2.0;
        let half_height = f64::from(self.pixel_rect.height()) / 2.0;

        Complex {
            real: self.center.real + (f64::from(pixel.x) - half_width) * self.zoom,
            imag: self.center.imag + (f64::from(pixel.y) - half_height) * self.zoom,
        }
    }
}
