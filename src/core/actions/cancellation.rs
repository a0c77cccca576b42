#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "render cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Cooperative cancellation flag, polled by generators between pixel rows.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn never_cancel_always_returns_false() {
        let token = NeverCancel;
        assert!(!token.is_cancelled());
        assert!(!token.is_cancelled());
    }

    #[test]
    fn closure_token_tracks_latest_request_id() {
        let latest = AtomicU64::new(1);
        let job_id = 1;
        let token = || latest.load(Ordering::Relaxed) != job_id;

        assert!(!token.is_cancelled());

        latest.store(2, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }

    #[test]
    fn closure_token_usable_as_trait_object() {
        let token = || true;
        let dyn_token: &dyn CancelToken = &token;

        assert!(dyn_token.is_cancelled());
    }
}
