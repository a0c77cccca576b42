mod controllers;
mod core;
mod logging;
mod presenters;

pub use controllers::cli::snapshot::{CliSnapshotController, SnapshotError};
pub use controllers::interactive::compute_worker::{
    RenderFn, SupersededPolicy, ThreadComputeUnit, WORKER_THREAD_NAME,
};
pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::data::render_request::RenderRequest;
pub use controllers::interactive::data::render_result::{RenderResponse, RenderResult};
pub use controllers::interactive::dispatcher::RenderDispatcher;
pub use controllers::interactive::errors::compute_unit::ComputeUnitError;
pub use controllers::interactive::errors::dispatch::DispatchError;
pub use controllers::interactive::errors::render::RenderError;
pub use controllers::interactive::events::render_event::RenderEvent;
pub use controllers::interactive::ports::compute_unit::ComputeUnit;
pub use controllers::interactive::ports::presenter::RenderPresenterPort;
pub use controllers::ports::file_presenter::FilePresenterPort;

pub use core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use core::actions::generate_pixel_buffer::generate_pixel_buffer_rayon::{
    generate_pixel_buffer_rayon, generate_pixel_buffer_rayon_cancelable,
};
pub use core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
pub use core::data::colour::Colour;
pub use core::data::complex::Complex;
pub use core::data::pixel_buffer::{BYTES_PER_PIXEL, OPAQUE, PixelBuffer, PixelBufferError};
pub use core::data::pixel_rect::{PixelRect, PixelRectError};
pub use core::data::point::Point;
pub use core::data::view_state::{ViewState, ViewStateParseError};
pub use core::data::viewport::{Viewport, ViewportError};
pub use core::fractals::mandelbrot::algorithm::{BOUNDED, MandelbrotAlgorithm, escape_time};
pub use core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
pub use core::fractals::mandelbrot::colour_mapping::maps::dusk_gradient::MandelbrotDuskGradient;
pub use core::fractals::mandelbrot::colour_mapping::maps::log_gradient::LogGradient;
pub use core::fractals::mandelbrot::colour_mapping::maps::slate_gradient::MandelbrotSlateGradient;
pub use core::fractals::mandelbrot::mandelbrot_config::{DEFAULT_MAX_ITERATIONS, MandelbrotConfig};
pub use core::fractals::mandelbrot::render::{
    render_mandelbrot, render_mandelbrot_cancelable, render_mandelbrot_serial,
};
pub use logging::{DEFAULT_LEVEL, LoggingConfig, init_logging};
pub use presenters::file::ppm::{PpmFilePresenter, write_ppm};
pub use presenters::latest_frame::LatestFramePresenter;
