use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ComputeUnitError {
    Spawn(io::Error),
    Disconnected,
}

impl fmt::Display for ComputeUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputeUnitError::Spawn(err) => write!(f, "failed to start compute worker: {}", err),
            ComputeUnitError::Disconnected => write!(f, "compute worker is not accepting requests"),
        }
    }
}

impl std::error::Error for ComputeUnitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComputeUnitError::Spawn(err) => Some(err),
            ComputeUnitError::Disconnected => None,
        }
    }
}
