pub mod compute_unit;
pub mod dispatch;
pub mod render;
