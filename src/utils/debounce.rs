//! Search-as-you-type debouncing with explicit per-lookup cancellation.
//!
//! A [`Debouncer`] owns one input field. Every call to [`Debouncer::run`]
//! cancels the token of the previous lookup, waits the configured delay and
//! only then performs the lookup, so at most one lookup per field is in
//! flight and a superseded lookup never reports a result.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct TokenState {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Cancellation handle of a single lookup.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    state: Arc<TokenState>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::SeqCst);
        self.state.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once [`CancelToken::cancel`] has been called.
    pub async fn cancelled(&self) {
        loop {
            // Registered before the flag check so a concurrent cancel is not missed.
            let notified = self.state.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

/// Debounced lookups for one input field.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    current: Mutex<Option<CancelToken>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            current: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `lookup` after the delay unless a newer call supersedes it first.
    ///
    /// Returns `None` when superseded, during the delay or while the lookup
    /// itself is in flight.
    pub async fn run<F, Fut, T>(&self, lookup: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let token = self.supersede();

        tokio::select! {
            _ = token.cancelled() => None,
            result = async {
                tokio::time::sleep(self.delay).await;
                lookup().await
            } => (!token.is_cancelled()).then_some(result),
        }
    }

    /// Cancels the pending or in-flight lookup, if any.
    pub fn cancel(&self) {
        let previous = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(token) = previous {
            token.cancel();
        }
    }

    fn supersede(&self) -> CancelToken {
        let token = CancelToken::new();
        let previous = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(token.clone());

        if let Some(previous) = previous {
            previous.cancel();
        }

        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test]
    async fn test_cancel_token_wakes_waiter() {
        let token = CancelToken::new();
        let waiter = {
            let token = token.clone();
            tokio::spawn(async move { token.cancelled().await })
        };

        tokio::task::yield_now().await;
        token.cancel();

        waiter.await.unwrap();
        assert!(token.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_lookup_runs_after_delay() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let started = tokio::time::Instant::now();

        let result = debouncer.run(|| async { 42 }).await;

        assert_eq!(result, Some(42));
        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_keystroke_supersedes_pending_lookup() {
        let debouncer = Arc::new(Debouncer::new(Duration::from_millis(300)));
        let calls = Arc::new(AtomicUsize::new(0));

        let first = {
            let debouncer = debouncer.clone();
            let calls = calls.clone();
            tokio::spawn(async move {
                debouncer
                    .run(|| async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        "chand"
                    })
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(100)).await;

        let second = {
            let calls = calls.clone();
            debouncer
                .run(|| async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    "chandigarh"
                })
                .await
        };

        assert_eq!(second, Some("chandigarh"));
        assert_eq!(first.await.unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_in_flight_lookup_is_aborted() {
        let debouncer = Arc::new(Debouncer::new(Duration::from_millis(300)));

        let slow = {
            let debouncer = debouncer.clone();
            tokio::spawn(async move {
                debouncer
                    .run(|| async {
                        tokio::time::sleep(Duration::from_secs(5)).await;
                        "slow"
                    })
                    .await
            })
        };

        // Past the delay: the slow lookup is now in flight.
        tokio::time::sleep(Duration::from_millis(500)).await;
        debouncer.cancel();

        assert_eq!(slow.await.unwrap(), None);
    }
}
