//! Raster generation for a Mandelbrot viewport.

use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer_rayon::generate_pixel_buffer_rayon_cancelable;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// Renders every pixel of `viewport` to opaque RGBA.
///
/// Pure in its inputs: the same arguments always give the same bytes.
pub fn render_mandelbrot(
    viewport: Viewport,
    max_iterations: u32,
    colour_map_kind: MandelbrotColourMapKinds,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    render_mandelbrot_cancelable(viewport, max_iterations, colour_map_kind, &NeverCancel)
}

/// Like [`render_mandelbrot`], but gives up between rows once `cancel` fires.
pub fn render_mandelbrot_cancelable<C: CancelToken + ?Sized>(
    viewport: Viewport,
    max_iterations: u32,
    colour_map_kind: MandelbrotColourMapKinds,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let algorithm = MandelbrotAlgorithm::new(viewport, max_iterations);
    let colour_map = mandelbrot_colour_map_factory(colour_map_kind, max_iterations);

    generate_pixel_buffer_rayon_cancelable(viewport.pixel_rect(), &algorithm, &colour_map, cancel)
}

/// Single-threaded reference renderer. Byte-identical to [`render_mandelbrot`].
pub fn render_mandelbrot_serial(
    viewport: Viewport,
    max_iterations: u32,
    colour_map_kind: MandelbrotColourMapKinds,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let algorithm = MandelbrotAlgorithm::new(viewport, max_iterations);
    let colour_map = mandelbrot_colour_map_factory(colour_map_kind, max_iterations);

    generate_pixel_buffer(viewport.pixel_rect(), &algorithm, &colour_map)
}
