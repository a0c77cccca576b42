use std::time::Duration;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::data::render_result::RenderResponse;
use crate::controllers::interactive::errors::compute_unit::ComputeUnitError;

/// Background executor for render requests.
///
/// `submit` must return without waiting for the render. Responses may arrive
/// in any order and each names the request it answers.
pub trait ComputeUnit {
    fn submit(&mut self, request: RenderRequest) -> Result<(), ComputeUnitError>;

    /// Next ready response, if any, without blocking.
    fn try_next(&mut self) -> Option<RenderResponse>;

    /// Blocks for at most `timeout` waiting for a response.
    fn next_timeout(&mut self, timeout: Duration) -> Option<RenderResponse>;
}
