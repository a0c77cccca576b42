use std::time::Duration;

use crate::controllers::interactive::data::render_result::RenderResult;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub request_id: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

impl From<RenderResult> for FrameData {
    fn from(result: RenderResult) -> Self {
        Self {
            request_id: result.request_id,
            pixel_buffer: result.pixel_buffer,
            render_duration: result.render_duration,
        }
    }
}
