use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SendError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::data::render_result::{RenderResponse, RenderResult};
use crate::controllers::interactive::errors::compute_unit::ComputeUnitError;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::ports::compute_unit::ComputeUnit;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::render::render_mandelbrot_cancelable;

pub const WORKER_THREAD_NAME: &str = "mandelbrot-render";

/// What the worker does with a request that is no longer the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupersededPolicy {
    /// Every request is rendered and answered; the dispatcher drops stale frames.
    #[default]
    RunToCompletion,
    /// Superseded requests are skipped or stopped at the next row and never answered.
    CancelSuperseded,
}

pub type RenderFn =
    fn(&RenderRequest, &dyn CancelToken) -> Result<PixelBuffer, GeneratePixelBufferError>;

struct SharedState {
    latest_request_id: AtomicU64,
    shutdown: AtomicBool,
}

struct Worker {
    requests: Sender<RenderRequest>,
    responses: Receiver<RenderResponse>,
    handle: JoinHandle<()>,
}

/// Compute unit backed by one dedicated render thread.
///
/// The thread is started on the first submit. Requests and responses travel
/// over channels; the only shared memory is the latest id and a shutdown flag
/// read by the cancel token.
pub struct ThreadComputeUnit {
    shared: Arc<SharedState>,
    policy: SupersededPolicy,
    render: RenderFn,
    worker: Option<Worker>,
}

impl Default for ThreadComputeUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadComputeUnit {
    pub fn new() -> Self {
        Self::with_policy(SupersededPolicy::default())
    }

    pub fn with_policy(policy: SupersededPolicy) -> Self {
        Self::with_renderer(policy, render_request)
    }

    pub fn with_renderer(policy: SupersededPolicy, render: RenderFn) -> Self {
        Self {
            shared: Arc::new(SharedState {
                latest_request_id: AtomicU64::new(0),
                shutdown: AtomicBool::new(false),
            }),
            policy,
            render,
            worker: None,
        }
    }

    #[must_use]
    pub fn policy(&self) -> SupersededPolicy {
        self.policy
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    fn ensure_worker(&mut self) -> Result<&Worker, ComputeUnitError> {
        if self.worker.is_none() {
            self.worker = Some(self.spawn_worker()?);
        }

        self.worker.as_ref().ok_or(ComputeUnitError::Disconnected)
    }

    fn spawn_worker(&self) -> Result<Worker, ComputeUnitError> {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();

        let shared = Arc::clone(&self.shared);
        let policy = self.policy;
        let render = self.render;

        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || worker_loop(&shared, policy, render, request_rx, response_tx))
            .map_err(ComputeUnitError::Spawn)?;

        log::debug!("started {} thread ({:?})", WORKER_THREAD_NAME, policy);

        Ok(Worker {
            requests: request_tx,
            responses: response_rx,
            handle,
        })
    }

    fn retire_worker(&mut self) {
        if let Some(Worker {
            requests,
            responses,
            handle,
        }) = self.worker.take()
        {
            drop(requests);
            drop(responses);

            if handle.join().is_err() {
                log::error!("{} thread panicked", WORKER_THREAD_NAME);
            }
        }
    }

    fn terminated(&mut self) -> RenderResponse {
        log::error!("{} thread has stopped", WORKER_THREAD_NAME);
        self.retire_worker();

        RenderResponse::Failed(RenderError::terminated())
    }
}

impl ComputeUnit for ThreadComputeUnit {
    fn submit(&mut self, request: RenderRequest) -> Result<(), ComputeUnitError> {
        self.shared
            .latest_request_id
            .store(request.request_id, Ordering::Release);

        let worker = self.ensure_worker()?;

        match worker.requests.send(request) {
            Ok(()) => Ok(()),
            Err(SendError(request)) => {
                log::warn!("{} thread has stopped; starting a new one", WORKER_THREAD_NAME);
                self.retire_worker();

                self.ensure_worker()?
                    .requests
                    .send(request)
                    .map_err(|_| ComputeUnitError::Disconnected)
            }
        }
    }

    fn try_next(&mut self) -> Option<RenderResponse> {
        let worker = self.worker.as_ref()?;

        match worker.responses.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.terminated()),
        }
    }

    fn next_timeout(&mut self, timeout: Duration) -> Option<RenderResponse> {
        let worker = self.worker.as_ref()?;

        match worker.responses.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(self.terminated()),
        }
    }
}

impl Drop for ThreadComputeUnit {
    fn drop(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.retire_worker();
    }
}

fn render_request(
    request: &RenderRequest,
    cancel: &dyn CancelToken,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    render_mandelbrot_cancelable(
        request.viewport,
        request.max_iterations,
        request.colour_map_kind,
        cancel,
    )
}

fn worker_loop(
    shared: &SharedState,
    policy: SupersededPolicy,
    render: RenderFn,
    requests: Receiver<RenderRequest>,
    responses: Sender<RenderResponse>,
) {
    for request in requests {
        if shared.shutdown.load(Ordering::Acquire) {
            return;
        }

        let request_id = request.request_id;

        let cancel_token = || {
            shared.shutdown.load(Ordering::Relaxed)
                || (policy == SupersededPolicy::CancelSuperseded
                    && request_id != shared.latest_request_id.load(Ordering::Relaxed))
        };

        if cancel_token() {
            log::debug!("skipping superseded render request {}", request_id);
            continue;
        }

        let start = Instant::now();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| render(&request, &cancel_token)));
        let render_duration = start.elapsed();

        let response = match outcome {
            Ok(Ok(pixel_buffer)) => RenderResponse::Rendered(RenderResult {
                request_id,
                pixel_buffer,
                render_duration,
            }),
            Ok(Err(GeneratePixelBufferError::Cancelled(_))) => {
                log::debug!("render request {} cancelled", request_id);
                continue;
            }
            Ok(Err(err)) => RenderResponse::Failed(RenderError::for_request(request_id, err.to_string())),
            Err(payload) => RenderResponse::Failed(RenderError::for_request(
                request_id,
                panic_message(payload.as_ref()),
            )),
        };

        if responses.send(response).is_err() {
            return;
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("render panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("render panicked: {}", message)
    } else {
        "render panicked".to_string()
    }
}
