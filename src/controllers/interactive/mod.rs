//! Render dispatch for interactive exploration.
//!
//! The dispatcher lives on the control thread. It tags every request with a
//! fresh id, hands it to a [`ComputeUnit`](ports::compute_unit::ComputeUnit)
//! and presents a response only if it answers the latest request.
//!
//! # Architecture
//!
//! - **Input**: `request_view` / `request_render` on [`RenderDispatcher`]
//! - **Output**: [`RenderEvent`]s through a `RenderPresenterPort`
//! - **Compute**: [`ThreadComputeUnit`], one background thread running the
//!   rayon generators from `core/`

pub mod compute_worker;
pub mod data;
pub mod dispatcher;
pub mod errors;
pub mod events;
pub mod ports;

pub use compute_worker::{SupersededPolicy, ThreadComputeUnit};
pub use dispatcher::RenderDispatcher;
pub use events::render_event::RenderEvent;
