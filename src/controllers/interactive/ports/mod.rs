//! Interfaces between the dispatcher and the outside world.

pub mod compute_unit;
pub mod presenter;
