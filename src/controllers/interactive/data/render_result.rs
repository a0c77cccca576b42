use std::time::Duration;

use crate::controllers::interactive::errors::render::RenderError;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    pub request_id: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

/// Message sent back from the compute unit.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderResponse {
    Rendered(RenderResult),
    Failed(RenderError),
}

impl RenderResponse {
    /// `None` only for a failure of the compute unit itself.
    #[must_use]
    pub fn request_id(&self) -> Option<u64> {
        match self {
            RenderResponse::Rendered(result) => Some(result.request_id),
            RenderResponse::Failed(error) => error.request_id,
        }
    }
}
