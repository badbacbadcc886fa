// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use tokio::{sync::mpsc, time::Instant};

use crate::{CommonResult, Document, Element, EventPropagation, FieldId, LoginForm,
            LoginFormError, LoginFormEvent, LoginFormSignal, SafeUserFetcher, TextMatch};

/// Same default as `waitFor` in `@testing-library`.
pub const DEFAULT_WAIT_FOR_TIMEOUT: Duration = Duration::from_millis(1_000);

/// Size of the channel that fetch tasks use to send signals back to the form. There is
/// at most one fetch in flight, so this never fills up.
pub const SIGNAL_CHANNEL_SIZE: usize = 16;

/// Owns a mounted [`LoginForm`] and the receiving end of its signal channel, and acts
/// as the "main thread" that applies signals to it. Use it to:
/// 1. [`Self::render`] (mount) a form with an injected fetcher.
/// 2. Query [`Self::screen`], fire events with [`Self::fire_change`] and
///    [`Self::fire_click`].
/// 3. [`Self::wait_for`] async results, or [`Self::find_by_text`].
/// 4. [`Self::unmount`] it.
///
/// Must be used from inside a [tokio] runtime, since clicks spawn tasks.
#[derive(Debug)]
pub struct LoginFormHarness {
    form: LoginForm,
    signal_receiver: mpsc::Receiver<LoginFormSignal>,
    wait_for_timeout: Duration,
}

impl LoginFormHarness {
    #[must_use]
    pub fn render(fetcher: SafeUserFetcher) -> Self {
        let (signal_sender, signal_receiver) = mpsc::channel(SIGNAL_CHANNEL_SIZE);
        Self {
            form: LoginForm::new(fetcher, signal_sender),
            signal_receiver,
            wait_for_timeout: DEFAULT_WAIT_FOR_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_wait_for_timeout(mut self, timeout: Duration) -> Self {
        self.wait_for_timeout = timeout;
        self
    }

    /// Snapshot of what the form renders right now.
    #[must_use]
    pub fn screen(&self) -> Document { self.form.render() }

    #[must_use]
    pub fn form(&self) -> &LoginForm { &self.form }

    pub fn fire_change(
        &mut self,
        field: FieldId,
        value: impl Into<String>,
    ) -> EventPropagation {
        self.form.handle_event(LoginFormEvent::change(field, value))
    }

    pub fn fire_click(&mut self) -> EventPropagation {
        self.form.handle_event(LoginFormEvent::Click)
    }

    /// Apply signals as they arrive until `predicate` holds for the rendered
    /// [`Document`].
    ///
    /// # Errors
    ///
    /// - [`LoginFormError::WaitForTimedOut`] if the predicate doesn't hold in time.
    /// - [`LoginFormError::SignalChannelClosed`] can't actually happen while the form
    ///   is mounted, since the form holds a sender.
    pub async fn wait_for(
        &mut self,
        predicate: impl Fn(&Document) -> bool,
    ) -> CommonResult<()> {
        let deadline = Instant::now() + self.wait_for_timeout;

        loop {
            // Drain whatever already arrived, without waiting.
            while let Ok(signal) = self.signal_receiver.try_recv() {
                self.form.apply_signal(signal);
            }

            if predicate(&self.form.render()) {
                return Ok(());
            }

            match tokio::time::timeout_at(deadline, self.signal_receiver.recv()).await {
                Ok(Some(signal)) => {
                    self.form.apply_signal(signal);
                }
                Ok(None) => return Err(LoginFormError::SignalChannelClosed.into()),
                Err(_elapsed) => {
                    // One last check, in case the state was already good.
                    if predicate(&self.form.render()) {
                        return Ok(());
                    }
                    return Err(LoginFormError::WaitForTimedOut {
                        timeout_ms: self.wait_for_timeout.as_millis(),
                    }
                    .into());
                }
            }
        }
    }

    /// Wait until exactly one element's text matches `text_match`, and return it. If
    /// that doesn't happen in time, the error from the last [`Document::get_by_text`]
    /// is returned, eg: [`LoginFormError::MultipleElementsFound`].
    ///
    /// # Errors
    ///
    /// See [`Self::wait_for`] and [`Document::get_by_text`].
    pub async fn find_by_text(&mut self, text_match: TextMatch) -> CommonResult<Element> {
        let wait_result = self
            .wait_for(|document| document.get_by_text(&text_match).is_ok())
            .await;

        let document = self.screen();
        match (wait_result, document.get_by_text(&text_match)) {
            (Ok(()), Ok(element)) => Ok(element.clone()),
            (_, Err(last_error)) => Err(last_error),
            (Err(wait_error), Ok(_)) => Err(wait_error),
        }
    }

    /// Drop the form. Any fetch in flight is aborted.
    pub fn unmount(self) { drop(self); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementId, Role, StubUserFetcher, UserRecord, assert_eq2};

    #[tokio::test]
    async fn test_wait_for_times_out_on_stalled_fetch() {
        let mut harness =
            LoginFormHarness::render(StubUserFetcher::never_resolves().into_safe())
                .with_wait_for_timeout(Duration::from_millis(50));
        harness.fire_change(FieldId::Username, "test");
        harness.fire_change(FieldId::Password, "password");
        harness.fire_click();

        let report = harness
            .wait_for(|document| document.query_by_id(ElementId::UserName).is_some())
            .await
            .unwrap_err();
        assert_eq2!(
            report.downcast_ref::<LoginFormError>(),
            Some(&LoginFormError::WaitForTimedOut { timeout_ms: 50 })
        );

        // Still loading, the stalled state is accepted.
        assert!(harness.form().state().is_loading);
    }

    #[tokio::test]
    async fn test_wait_for_returns_immediately_if_already_true() {
        let mut harness = LoginFormHarness::render(
            StubUserFetcher::resolves(UserRecord::new(1, "John")).into_safe(),
        );
        harness
            .wait_for(|document| document.get_by_role(Role::Button).is_ok())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_find_by_text() {
        let mut harness = LoginFormHarness::render(
            StubUserFetcher::resolves(UserRecord::new(1, "John")).into_safe(),
        );
        harness.fire_change(FieldId::Username, "test");
        harness.fire_change(FieldId::Password, "password");
        harness.fire_click();

        let it = harness.find_by_text(TextMatch::exact("John")).await.unwrap();
        assert_eq2!(it.id, ElementId::UserName);
    }

    #[tokio::test]
    async fn test_find_by_text_reports_multiple_matches() {
        let mut harness = LoginFormHarness::render(
            StubUserFetcher::resolves(UserRecord::new(1, "Login")).into_safe(),
        )
        .with_wait_for_timeout(Duration::from_millis(50));
        harness.fire_change(FieldId::Username, "test");
        harness.fire_change(FieldId::Password, "password");
        harness.fire_click();

        // The button label and the user name are both "Login".
        let report = harness
            .find_by_text(TextMatch::exact("Login"))
            .await
            .unwrap_err();
        assert_eq2!(
            report.downcast_ref::<LoginFormError>(),
            Some(&LoginFormError::MultipleElementsFound {
                query: "text \"Login\"".into(),
                count: 2,
            })
        );
        assert!(harness.form().state().maybe_user.is_some());
    }
}
