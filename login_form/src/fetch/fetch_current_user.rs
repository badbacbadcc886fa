// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, pin::Pin, sync::Arc};

use crate::{FetchError, UserRecord};

/// The future returned by [`FetchCurrentUser::get_current_user`]. It is boxed so that
/// the trait is object safe, and `Send` so that it can be awaited on a spawned
/// [tokio] task.
pub type PinnedFetchFuture =
    Pin<Box<dyn Future<Output = Result<UserRecord, FetchError>> + Send + 'static>>;

/// Shared handle to a fetcher. The [`crate::LoginForm`] holds one of these and clones it
/// into the task it spawns for each submission.
pub type SafeUserFetcher = Arc<dyn FetchCurrentUser>;

/// The capability that the [`crate::LoginForm`] consumes to retrieve the current user.
/// The form does not know or care how this is implemented:
/// - [`crate::HttpUserFetcher`] does a GET request.
/// - [`crate::StubUserFetcher`] resolves or rejects on demand (tests, offline mode).
pub trait FetchCurrentUser: Send + Sync + Debug {
    /// Resolves with the current user, or fails.
    ///
    /// The returned future must not borrow from `self`, it gets moved into a spawned
    /// task.
    fn get_current_user(&self) -> PinnedFetchFuture;
}
