use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::controllers::interactive::compute_worker::ThreadComputeUnit;
use crate::controllers::interactive::dispatcher::RenderDispatcher;
use crate::controllers::interactive::errors::dispatch::DispatchError;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::presenters::latest_frame::LatestFramePresenter;

#[derive(Debug)]
pub enum SnapshotError {
    Dispatch(DispatchError),
    Render(RenderError),
    Timeout(Duration),
    NoFrame,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Dispatch(err) => write!(f, "{}", err),
            SnapshotError::Render(err) => write!(f, "{}", err),
            SnapshotError::Timeout(timeout) => {
                write!(f, "render did not finish within {:?}", timeout)
            }
            SnapshotError::NoFrame => write!(f, "render finished without a frame"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Dispatch(err) => Some(err),
            SnapshotError::Render(err) => Some(err),
            SnapshotError::Timeout(_) | SnapshotError::NoFrame => None,
        }
    }
}

impl From<DispatchError> for SnapshotError {
    fn from(err: DispatchError) -> Self {
        SnapshotError::Dispatch(err)
    }
}

impl From<RenderError> for SnapshotError {
    fn from(err: RenderError) -> Self {
        SnapshotError::Render(err)
    }
}

/// Renders one view through the dispatcher and writes it with a file presenter.
pub struct CliSnapshotController<P: FilePresenterPort> {
    presenter: P,
    frames: Arc<LatestFramePresenter>,
    dispatcher: RenderDispatcher<ThreadComputeUnit>,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliSnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        let frames = Arc::new(LatestFramePresenter::new());
        let dispatcher = RenderDispatcher::new(
            ThreadComputeUnit::new(),
            Arc::clone(&frames) as Arc<dyn RenderPresenterPort>,
        );

        Self {
            presenter,
            frames,
            dispatcher,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        canvas_width: u32,
        canvas_height: u32,
        config: &MandelbrotConfig,
        timeout: Duration,
    ) -> Result<(), SnapshotError> {
        log::info!(
            "Rendering {}x{} at {} with {} iterations ({})",
            canvas_width,
            canvas_height,
            config.view,
            config.max_iterations,
            config.colour_map_kind,
        );

        self.dispatcher
            .request_view(canvas_width, canvas_height, config)?;

        if !self.dispatcher.wait_until_idle(timeout) {
            return Err(SnapshotError::Timeout(timeout));
        }

        if let Some(error) = self.frames.take_error() {
            return Err(error.into());
        }

        let frame = self.frames.take_frame().ok_or(SnapshotError::NoFrame)?;
        log::info!("Duration: {:?}", frame.render_duration);

        self.buffer = Some(frame.pixel_buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::core::fractals::mandelbrot::render::render_mandelbrot;

    #[derive(Default)]
    struct RecordingFilePresenter {
        written: RefCell<Vec<(String, PixelBuffer)>>,
    }

    impl FilePresenterPort for RecordingFilePresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().display().to_string(), buffer.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_generate_then_write() {
        let mut controller = CliSnapshotController::new(RecordingFilePresenter::default());
        let mut config = MandelbrotConfig::default();
        config.max_iterations = 80;

        controller
            .generate(32, 24, &config, Duration::from_secs(10))
            .unwrap();
        controller.write("snapshot.ppm").unwrap();

        let expected = render_mandelbrot(
            config.build_viewport(32, 24).unwrap(),
            80,
            config.colour_map_kind,
        )
        .unwrap();

        let written = controller.presenter.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, "snapshot.ppm");
        assert_eq!(written[0].1, expected);
    }

    #[test]
    fn test_write_before_generate_is_noop() {
        let controller = CliSnapshotController::new(RecordingFilePresenter::default());

        controller.write("unused.ppm").unwrap();

        assert!(controller.buffer().is_none());
        assert!(controller.presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_invalid_canvas_is_rejected() {
        let mut controller = CliSnapshotController::new(RecordingFilePresenter::default());

        let result = controller.generate(0, 24, &MandelbrotConfig::default(), Duration::from_secs(1));

        assert!(matches!(
            result,
            Err(SnapshotError::Dispatch(DispatchError::InvalidViewport(_)))
        ));
    }
}
