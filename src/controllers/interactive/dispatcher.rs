use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::data::render_result::{RenderResponse, RenderResult};
use crate::controllers::interactive::errors::dispatch::DispatchError;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::compute_unit::ComputeUnit;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Sends render requests to a compute unit and publishes only the newest answer.
///
/// Every request gets a fresh id. A response is presented only when its id is
/// still the latest one issued, so a slow render of an old view can never
/// overwrite a newer one, whatever order the responses arrive in.
pub struct RenderDispatcher<U: ComputeUnit> {
    compute_unit: U,
    presenter_port: Arc<dyn RenderPresenterPort>,
    current_request_id: u64,
    outstanding: bool,
    colour_map_kind: MandelbrotColourMapKinds,
}

impl<U: ComputeUnit> RenderDispatcher<U> {
    pub fn new(compute_unit: U, presenter_port: Arc<dyn RenderPresenterPort>) -> Self {
        Self {
            compute_unit,
            presenter_port,
            current_request_id: 0,
            outstanding: false,
            colour_map_kind: MandelbrotColourMapKinds::default(),
        }
    }

    #[must_use]
    pub fn current_request_id(&self) -> u64 {
        self.current_request_id
    }

    #[must_use]
    pub fn is_outstanding(&self) -> bool {
        self.outstanding
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKinds {
        self.colour_map_kind
    }

    /// Palette used by subsequent requests. Requests already sent keep theirs.
    pub fn set_colour_map_kind(&mut self, colour_map_kind: MandelbrotColourMapKinds) {
        self.colour_map_kind = colour_map_kind;
    }

    /// Requests a render of `config`'s view on a canvas of the given size.
    ///
    /// The viewport is validated here, so a bad canvas or view fails
    /// synchronously without consuming a request id.
    pub fn request_view(
        &mut self,
        canvas_width: u32,
        canvas_height: u32,
        config: &MandelbrotConfig,
    ) -> Result<u64, DispatchError> {
        let viewport = config.build_viewport(canvas_width, canvas_height)?;

        let request_id = self.dispatch(viewport, config.max_iterations, config.colour_map_kind)?;
        self.colour_map_kind = config.colour_map_kind;

        Ok(request_id)
    }

    /// Issues a new request id and hands the work to the compute unit.
    ///
    /// Accepted even while an earlier request is outstanding; that request
    /// simply becomes stale.
    pub fn request_render(
        &mut self,
        viewport: Viewport,
        max_iterations: u32,
    ) -> Result<u64, DispatchError> {
        self.dispatch(viewport, max_iterations, self.colour_map_kind)
    }

    fn dispatch(
        &mut self,
        viewport: Viewport,
        max_iterations: u32,
        colour_map_kind: MandelbrotColourMapKinds,
    ) -> Result<u64, DispatchError> {
        self.current_request_id += 1;

        let request = RenderRequest {
            request_id: self.current_request_id,
            viewport,
            max_iterations,
            colour_map_kind,
        };

        log::debug!(
            "dispatching render request {} ({}x{}, {} iterations, {})",
            request.request_id,
            viewport.pixel_rect().width(),
            viewport.pixel_rect().height(),
            max_iterations,
            request.colour_map_kind,
        );

        if let Err(err) = self.compute_unit.submit(request) {
            log::error!("render request {} was not submitted: {}", request.request_id, err);
            self.outstanding = false;
            return Err(err.into());
        }

        self.outstanding = true;

        Ok(request.request_id)
    }

    /// Returns `true` when the frame was current and got presented.
    pub fn on_result(&mut self, result: RenderResult) -> bool {
        if result.request_id != self.current_request_id {
            log::debug!(
                "discarding stale frame {} (latest is {})",
                result.request_id,
                self.current_request_id
            );
            return false;
        }

        log::debug!(
            "presenting frame {} rendered in {:?}",
            result.request_id,
            result.render_duration
        );

        self.outstanding = false;
        self.presenter_port
            .present(RenderEvent::Frame(FrameData::from(result)));

        true
    }

    /// Returns `true` when the failure was surfaced to the presenter.
    pub fn on_failure(&mut self, error: RenderError) -> bool {
        if let Some(request_id) = error.request_id {
            if request_id != self.current_request_id {
                log::warn!(
                    "ignoring failure of stale render request {}: {}",
                    request_id,
                    error.message
                );
                return false;
            }
        }

        log::error!("{}", error);

        self.outstanding = false;
        self.presenter_port.present(RenderEvent::Error(error));

        true
    }

    pub fn handle_response(&mut self, response: RenderResponse) -> bool {
        match response {
            RenderResponse::Rendered(result) => self.on_result(result),
            RenderResponse::Failed(error) => self.on_failure(error),
        }
    }

    /// Handles every response that is already waiting. Never blocks.
    ///
    /// Returns how many responses were handled, stale ones included.
    pub fn poll(&mut self) -> usize {
        let mut handled = 0;

        while let Some(response) = self.compute_unit.try_next() {
            self.handle_response(response);
            handled += 1;
        }

        handled
    }

    /// Blocks until the latest request has been answered or `timeout` passes.
    ///
    /// For callers with nothing else to do, such as the snapshot CLI.
    pub fn wait_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;

        while self.outstanding {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }

            if let Some(response) = self.compute_unit.next_timeout(remaining) {
                self.handle_response(response);
            }
        }

        true
    }
}
