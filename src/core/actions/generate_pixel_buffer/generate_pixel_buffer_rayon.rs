use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    fill_row, row_len, GeneratePixelBufferError,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{pixel_rect_to_buffer_size, PixelBuffer};
use crate::core::data::pixel_rect::PixelRect;

/// Generates a pixel buffer with rows spread over rayon's work-stealing pool.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_rayon_cancelable`].
pub fn generate_pixel_buffer_rayon<Alg, CMap>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    generate_pixel_buffer_rayon_cancelable(pixel_rect, algorithm, colour_map, &NeverCancel)
}

/// Generates a pixel buffer in parallel with cancellation support.
///
/// Every row polls `cancel` before it is computed. All rows write straight
/// into one preallocated buffer, so no allocation happens per pixel or per
/// row. A cancelled run returns [`GeneratePixelBufferError::Cancelled`] and
/// drops the partial bytes.
pub fn generate_pixel_buffer_rayon_cancelable<Alg, CMap, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    C: CancelToken + ?Sized,
{
    let mut buffer = vec![0; pixel_rect_to_buffer_size(pixel_rect)];

    buffer
        .par_chunks_mut(row_len(pixel_rect))
        .enumerate()
        .try_for_each(|(y, row)| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            fill_row(y as u32, row, algorithm, colour_map);
            Ok(())
        })?;

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
