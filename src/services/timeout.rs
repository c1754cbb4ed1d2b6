//! Deadline guard for statistics computations.
//!
//! The computation is spawned onto the runtime and the caller waits on its
//! join handle. When the deadline passes first the handle is dropped, which
//! detaches the task: it keeps running and its result is discarded.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Which side of the race settled first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    Completed(T),
    Failed(String),
    TimedOut(Duration),
}

impl<T> Guarded<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Collapses the outcome to a value. Failures and timeouts are logged as
    /// separate events but both yield `fallback`.
    pub fn or_fallback(self, fallback: T) -> T {
        match self {
            Self::Completed(value) => value,
            Self::Failed(reason) => {
                tracing::warn!(cause = "failure", error = %reason, "computation failed, serving fallback");
                fallback
            }
            Self::TimedOut(timeout) => {
                tracing::warn!(
                    cause = "timeout",
                    timeout_ms = timeout.as_millis() as u64,
                    "computation timed out, serving fallback"
                );
                fallback
            }
        }
    }
}

pub async fn guard<F, T, E>(computation: F, timeout: Duration) -> Guarded<T>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Display + Send + 'static,
{
    let handle = tokio::spawn(computation);

    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(Ok(value))) => Guarded::Completed(value),
        Ok(Ok(Err(e))) => Guarded::Failed(e.to_string()),
        Ok(Err(join_error)) => Guarded::Failed(format!("computation aborted: {}", join_error)),
        Err(_) => Guarded::TimedOut(timeout),
    }
}

/// Runs `computation` with a deadline and never fails: a timeout or an error
/// both produce `fallback`.
pub async fn with_timeout<F, T, E>(computation: F, timeout: Duration, fallback: T) -> T
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Display + Send + 'static,
{
    guard(computation, timeout).await.or_fallback(fallback)
}
