use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{OktaError, OktaResult};

/// Per-call cancellation and deadline carrier.
///
/// Every client operation takes a `&RequestContext` and aborts its in-flight
/// request as soon as the token is cancelled or the deadline passes. Clones
/// share the same token, so cancelling any clone cancels them all.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    #[must_use]
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancel: token,
            deadline: None,
        }
    }

    /// Narrows the deadline to `now + timeout` unless an earlier one is set.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        self.deadline = Some(match self.deadline {
            Some(existing) if existing <= candidate => existing,
            _ => candidate,
        });
        self
    }

    /// Derives a context cancelled together with `self` that can also be
    /// cancelled on its own without affecting the parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub(crate) fn check(&self) -> OktaResult<()> {
        if self.cancel.is_cancelled() {
            return Err(OktaError::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| deadline <= Instant::now()) {
            return Err(OktaError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Drives `future` until it completes, the token is cancelled, or the
    /// deadline passes. Dropping the losing future aborts the request.
    pub(crate) async fn run<F, T>(&self, future: F) -> OktaResult<T>
    where
        F: Future<Output = OktaResult<T>>,
    {
        self.check()?;
        let deadline = self.deadline;
        let expired = async move {
            match deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(OktaError::Cancelled),
            () = expired => Err(OktaError::DeadlineExceeded),
            result = future => result,
        }
    }
}
