// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc,
                atomic::{AtomicUsize, Ordering}};

use tokio::sync::watch;

use crate::{FetchCurrentUser, FetchError, PinnedFetchFuture, SafeUserFetcher, UserRecord};

/// What a [`StubUserFetcher`] does when it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubOutcome {
    Resolve(UserRecord),
    Reject(String),
    /// Never completes. Models a stalled request.
    Pending,
}

/// A [`FetchCurrentUser`] that doesn't touch the network. Each test makes its own, so
/// there is no global mock shared between tests.
///
/// - Clones share state, so you can keep a clone around to inspect [`Self::call_count`]
///   or to [`Self::open_gate`] after handing one to the form.
/// - When created with [`Self::with_gate`], calls don't complete until the gate is
///   opened. This lets a test observe the form while the fetch is in flight.
#[derive(Debug, Clone)]
pub struct StubUserFetcher {
    inner: Arc<StubUserFetcherInner>,
}

#[derive(Debug)]
struct StubUserFetcherInner {
    outcome: StubOutcome,
    maybe_gate: Option<watch::Sender<bool>>,
    call_count: AtomicUsize,
}

impl StubUserFetcher {
    #[must_use]
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            inner: Arc::new(StubUserFetcherInner {
                outcome,
                maybe_gate: None,
                call_count: AtomicUsize::new(0),
            }),
        }
    }

    #[must_use]
    pub fn resolves(user_record: UserRecord) -> Self {
        Self::new(StubOutcome::Resolve(user_record))
    }

    #[must_use]
    pub fn rejects(reason: impl Into<String>) -> Self {
        Self::new(StubOutcome::Reject(reason.into()))
    }

    #[must_use]
    pub fn never_resolves() -> Self { Self::new(StubOutcome::Pending) }

    /// Calls will wait until [`Self::open_gate`] is called. Must be called before the
    /// stub is cloned.
    #[must_use]
    pub fn with_gate(self) -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            inner: Arc::new(StubUserFetcherInner {
                outcome: self.inner.outcome.clone(),
                maybe_gate: Some(sender),
                call_count: AtomicUsize::new(self.inner.call_count.load(Ordering::SeqCst)),
            }),
        }
    }

    /// Let all calls (waiting now, or made later) complete. No-op if there's no gate.
    pub fn open_gate(&self) {
        if let Some(gate) = &self.inner.maybe_gate {
            gate.send_replace(true);
        }
    }

    #[must_use]
    pub fn call_count(&self) -> usize { self.inner.call_count.load(Ordering::SeqCst) }

    #[must_use]
    pub fn into_safe(self) -> SafeUserFetcher { Arc::new(self) }
}

impl FetchCurrentUser for StubUserFetcher {
    fn get_current_user(&self) -> PinnedFetchFuture {
        self.inner.call_count.fetch_add(1, Ordering::SeqCst);

        let outcome = self.inner.outcome.clone();
        let maybe_gate = self.inner.maybe_gate.as_ref().map(watch::Sender::subscribe);

        Box::pin(async move {
            if let Some(mut gate) = maybe_gate {
                // The sender lives as long as the stub. If it's gone, nobody can open
                // the gate anymore, so behave like a stalled request.
                let gate_result = gate.wait_for(|is_open| *is_open).await.map(|_| ());
                if gate_result.is_err() {
                    std::future::pending::<()>().await;
                }
            }

            match outcome {
                StubOutcome::Resolve(user_record) => Ok(user_record),
                StubOutcome::Reject(reason) => Err(FetchError::Rejected { reason }),
                StubOutcome::Pending => std::future::pending().await,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::assert_eq2;

    #[tokio::test]
    async fn test_resolves() {
        let stub = StubUserFetcher::resolves(UserRecord::new(1, "John"));
        let it = stub.get_current_user().await.unwrap();
        assert_eq2!(it, UserRecord::new(1, "John"));
        assert_eq2!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_rejects() {
        let stub = StubUserFetcher::rejects("nope");
        let it = stub.get_current_user().await;
        assert!(matches!(it, Err(FetchError::Rejected { reason }) if reason == "nope"));
    }

    #[tokio::test]
    async fn test_clones_share_call_count() {
        let stub = StubUserFetcher::resolves(UserRecord::new(1, "John"));
        let safe = stub.clone().into_safe();
        let _ = safe.get_current_user().await;
        let _ = safe.get_current_user().await;
        assert_eq2!(stub.call_count(), 2);
    }

    #[tokio::test]
    async fn test_gate_holds_until_opened() {
        let stub = StubUserFetcher::resolves(UserRecord::new(1, "John")).with_gate();
        let mut future = stub.get_current_user();

        let timed_out =
            tokio::time::timeout(Duration::from_millis(50), &mut future).await;
        assert!(timed_out.is_err());

        stub.open_gate();
        let it = tokio::time::timeout(Duration::from_secs(1), future)
            .await
            .unwrap()
            .unwrap();
        assert_eq2!(it.name, "John");
    }

    #[tokio::test]
    async fn test_never_resolves() {
        let stub = StubUserFetcher::never_resolves();
        let it =
            tokio::time::timeout(Duration::from_millis(50), stub.get_current_user()).await;
        assert!(it.is_err());
    }
}
