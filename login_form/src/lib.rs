// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_login_form
//!
//! A headless, fully async login form component, in the same spirit as the components
//! in `r3bl_tui`: it owns its state, handles input events, receives signals from
//! background tasks over a [tokio] channel, and renders into a declarative
//! [`Document`].
//!
//! The form has:
//! 1. A username input (placeholder `username`).
//! 2. A password input (placeholder `password`).
//! 3. A submit button that is disabled until both inputs are non-empty, and shows
//!    `Please wait...` while the current user is being fetched.
//! 4. An error indicator (test id `error`) that is hidden until a fetch fails.
//! 5. The fetched user's name, once a fetch succeeds.
//!
//! The current user is fetched by whatever implements [`FetchCurrentUser`]. This is
//! passed to the component when it is created, so tests can provide a
//! [`StubUserFetcher`] and the `login` binary can provide a [`HttpUserFetcher`].
//!
//! # Testing
//!
//! [`LoginFormHarness`] gives you a workflow similar to `@testing-library`:
//!
//! ```no_run
//! # use r3bl_login_form::*;
//! # async fn example() -> CommonResult<()> {
//! let fetcher = StubUserFetcher::resolves(UserRecord::new(1, "John"));
//! let mut harness = LoginFormHarness::render(fetcher.into_safe());
//!
//! harness.fire_change(FieldId::Username, "test");
//! harness.fire_change(FieldId::Password, "secret");
//! harness.fire_click();
//!
//! let user_name = harness.find_by_text(TextMatch::exact("John")).await?;
//! assert!(user_name.is_visible());
//! # Ok(())
//! # }
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod app;
pub mod common;
pub mod component;
pub mod document;
pub mod fetch;
pub mod harness;
pub mod log;

// Re-export.
pub use app::*;
pub use common::*;
pub use component::*;
pub use document::*;
pub use fetch::*;
pub use harness::*;
pub use log::*;
