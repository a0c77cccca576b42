use std::error::Error;
use std::fmt;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(f, "pixel rect {}x{} is too large for an RGBA buffer", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Pixel dimensions of a canvas anchored at (0, 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        if checked_buffer_size(width, height).is_none() {
            return Err(PixelRectError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

// Byte length of an RGBA buffer, if it fits in an allocation.
fn checked_buffer_size(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)?
        .checked_mul(BYTES_PER_PIXEL)
        .filter(|&size| size <= isize::MAX as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let rect = PixelRect::new(800, 600).unwrap();

        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
        assert_eq!(rect.size(), 480_000);
    }

    #[test]
    fn test_single_pixel_is_valid() {
        let rect = PixelRect::new(1, 1).unwrap();

        assert_eq!(rect.size(), 1);
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert_eq!(
            PixelRect::new(0, 10),
            Err(PixelRectError::InvalidSize {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_zero_height_is_rejected() {
        assert!(PixelRect::new(10, 0).is_err());
    }

    #[test]
    fn test_size_does_not_overflow_u32() {
        let rect = PixelRect::new(70_000, 70_000).unwrap();

        assert_eq!(rect.size(), 4_900_000_000);
    }

    #[test]
    fn test_oversized_rect_is_rejected() {
        assert_eq!(
            PixelRect::new(u32::MAX, u32::MAX),
            Err(PixelRectError::TooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn test_contains_point() {
        let rect = PixelRect::new(3, 2).unwrap();

        assert!(rect.contains_point(Point { x: 0, y: 0 }));
        assert!(rect.contains_point(Point { x: 2, y: 1 }));
        assert!(!rect.contains_point(Point { x: 3, y: 1 }));
        assert!(!rect.contains_point(Point { x: 0, y: 2 }));
    }

    #[test]
    fn test_error_display() {
        let err = PixelRectError::InvalidSize {
            width: 0,
            height: 5,
        };

        assert_eq!(err.to_string(), "pixel rect size must be positive: 0x5");
    }
}
