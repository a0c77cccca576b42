use std::fmt;

/// A render that produced no image.
///
/// `request_id` is `None` when the compute unit itself stopped rather than a
/// single request failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub request_id: Option<u64>,
    pub message: String,
}

impl RenderError {
    pub fn for_request(request_id: u64, message: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id),
            message: message.into(),
        }
    }

    pub fn terminated() -> Self {
        Self {
            request_id: None,
            message: "compute unit terminated".to_string(),
        }
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.request_id.is_none()
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.request_id {
            Some(request_id) => write!(f, "render request {} failed: {}", request_id, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for RenderError {}
