use std::fmt;

use crate::controllers::interactive::errors::compute_unit::ComputeUnitError;
use crate::core::data::viewport::ViewportError;

#[derive(Debug)]
pub enum DispatchError {
    InvalidViewport(ViewportError),
    ComputeUnit(ComputeUnitError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::InvalidViewport(err) => write!(f, "invalid viewport: {}", err),
            DispatchError::ComputeUnit(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::InvalidViewport(err) => Some(err),
            DispatchError::ComputeUnit(err) => Some(err),
        }
    }
}

impl From<ViewportError> for DispatchError {
    fn from(err: ViewportError) -> Self {
        DispatchError::InvalidViewport(err)
    }
}

impl From<ComputeUnitError> for DispatchError {
    fn from(err: ComputeUnitError) -> Self {
        DispatchError::ComputeUnit(err)
    }
}
