pub mod dusk_gradient;
pub mod log_gradient;
pub mod slate_gradient;
