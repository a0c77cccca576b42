//! Logger setup for the snapshot binary.
//!
//! The library only emits through the `log` facade; picking a backend is left
//! to whoever calls [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_LEVEL};
