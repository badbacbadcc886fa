// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors that can happen while driving a [`crate::LoginForm`] from the outside, eg:
/// querying a rendered [`crate::Document`] or waiting for an async signal in a
/// [`crate::LoginFormHarness`]. Failures of the current user fetch itself are not in
/// here, see [`crate::FetchError`] for those; the form never surfaces those as errors,
/// it only toggles its error indicator.
#[derive(thiserror::Error, Debug, miette::Diagnostic, PartialEq, Eq)]
pub enum LoginFormError {
    #[error("🔍 Could not find element matching: {query}")]
    #[diagnostic(
        code(login_form::element_not_found),
        help("Print the document with `{{}}` to see what was rendered")
    )]
    ElementNotFound { query: String },

    #[error("🔍 Found {count} elements matching: {query}, expected exactly one")]
    #[diagnostic(code(login_form::multiple_elements_found))]
    MultipleElementsFound { query: String, count: usize },

    #[error("⏳ Condition was not met within {timeout_ms}ms")]
    #[diagnostic(code(login_form::wait_for_timed_out))]
    WaitForTimedOut { timeout_ms: u128 },

    #[error("📡 Signal channel closed while waiting for the form to update")]
    #[diagnostic(code(login_form::signal_channel_closed))]
    SignalChannelClosed,
}
