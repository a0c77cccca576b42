use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;

#[derive(Debug, Default)]
struct LatestFrameState {
    frame: Option<FrameData>,
    error: Option<RenderError>,
}

/// Keeps the newest presented frame and the last error for a consumer to pick up.
///
/// An error does not clear the frame; the last good image stays available.
#[derive(Debug, Default)]
pub struct LatestFramePresenter {
    state: Mutex<LatestFrameState>,
}

impl LatestFramePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, LatestFrameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.lock().frame.take()
    }

    pub fn take_error(&self) -> Option<RenderError> {
        self.lock().error.take()
    }

    #[must_use]
    pub fn latest_request_id(&self) -> Option<u64> {
        self.lock().frame.as_ref().map(|frame| frame.request_id)
    }
}

impl RenderPresenterPort for LatestFramePresenter {
    fn present(&self, event: RenderEvent) {
        let mut state = self.lock();

        match event {
            RenderEvent::Frame(frame) => {
                state.frame = Some(frame);
                state.error = None;
            }
            RenderEvent::Error(error) => state.error = Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::pixel_rect::PixelRect;

    fn frame(request_id: u64) -> FrameData {
        FrameData {
            request_id,
            pixel_buffer: PixelBuffer::new(PixelRect::new(2, 2).unwrap()),
            render_duration: Duration::from_millis(3),
        }
    }

    #[test]
    fn test_keeps_newest_frame() {
        let presenter = LatestFramePresenter::new();

        presenter.present(RenderEvent::Frame(frame(1)));
        presenter.present(RenderEvent::Frame(frame(2)));

        assert_eq!(presenter.latest_request_id(), Some(2));
        assert_eq!(presenter.take_frame().map(|f| f.request_id), Some(2));
        assert!(presenter.take_frame().is_none());
    }

    #[test]
    fn test_error_keeps_last_frame() {
        let presenter = LatestFramePresenter::new();

        presenter.present(RenderEvent::Frame(frame(1)));
        presenter.present(RenderEvent::Error(RenderError::for_request(2, "boom")));

        assert_eq!(presenter.take_error().and_then(|e| e.request_id), Some(2));
        assert_eq!(presenter.latest_request_id(), Some(1));
    }

    #[test]
    fn test_frame_clears_error() {
        let presenter = LatestFramePresenter::new();

        presenter.present(RenderEvent::Error(RenderError::terminated()));
        presenter.present(RenderEvent::Frame(frame(3)));

        assert!(presenter.take_error().is_none());
    }
}
