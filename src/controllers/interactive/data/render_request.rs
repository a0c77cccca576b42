use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// One unit of work handed to the compute unit. Moved, never shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub request_id: u64,
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
}
