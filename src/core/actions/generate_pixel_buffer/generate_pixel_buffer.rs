use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{
    pixel_rect_to_buffer_size, write_rgba, PixelBuffer, PixelBufferError, BYTES_PER_PIXEL,
};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Error type for pixel buffer generation.
///
/// Cancellation is expected control flow when a newer render supersedes this
/// one, and should not be displayed as a failure.
#[derive(Debug)]
pub enum GeneratePixelBufferError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// The assembled bytes did not match the pixel rect.
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<Cancelled> for GeneratePixelBufferError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

/// Generates a pixel buffer one row after another on the calling thread.
///
/// Produces exactly the same bytes as
/// [`generate_pixel_buffer_rayon`](super::generate_pixel_buffer_rayon::generate_pixel_buffer_rayon).
pub fn generate_pixel_buffer<Alg, CMap>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut buffer = vec![0; pixel_rect_to_buffer_size(pixel_rect)];

    for (y, row) in buffer.chunks_exact_mut(row_len(pixel_rect)).enumerate() {
        fill_row(y as u32, row, algorithm, colour_map);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}

pub(crate) fn row_len(pixel_rect: PixelRect) -> usize {
    pixel_rect.width() as usize * BYTES_PER_PIXEL
}

/// Computes and colours every pixel of row `y` in place.
#[inline]
pub(crate) fn fill_row<Alg, CMap>(y: u32, row: &mut [u8], algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for (x, slot) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let value = algorithm.compute(Point { x: x as u32, y });
        write_rgba(slot, colour_map.map(value));
    }
}
