// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::{sync::mpsc::Sender, task::JoinHandle};

use crate::{Document, Element, ElementId, ElementKind, EventPropagation, FieldId,
            FormState, LoginFormEvent, LoginFormSignal, SafeUserFetcher, SubmissionId,
            ui_str};

/// The login form component.
///
/// 1. Input events are routed to [`Self::handle_event`].
/// 2. A click on the (enabled) submit button spawns a [tokio] task that awaits the
///    injected fetcher, and sends a [`LoginFormSignal`] on `signal_sender` when done.
/// 3. The owner receives that signal and routes it to [`Self::apply_signal`].
/// 4. [`Self::render`] can be called at any time to get a [`Document`].
///
/// Dropping the form (unmounting it) aborts the fetch that is in flight, if any.
#[derive(Debug)]
pub struct LoginForm {
    state: FormState,
    fetcher: SafeUserFetcher,
    signal_sender: Sender<LoginFormSignal>,
    current_submission_id: SubmissionId,
    maybe_in_flight: Option<JoinHandle<()>>,
}

mod constructor {
    use super::*;

    impl LoginForm {
        #[must_use]
        pub fn new(
            fetcher: SafeUserFetcher,
            signal_sender: Sender<LoginFormSignal>,
        ) -> Self {
            // % is Display, ? is Debug.
            tracing::debug!(message = "🪙 construct LoginForm", fetcher = ?fetcher);
            Self {
                state: FormState::default(),
                fetcher,
                signal_sender,
                current_submission_id: SubmissionId::default(),
                maybe_in_flight: None,
            }
        }
    }
}

mod handle_event_impl {
    use super::*;

    impl LoginForm {
        #[must_use]
        pub fn state(&self) -> &FormState { &self.state }

        pub fn handle_event(&mut self, event: LoginFormEvent) -> EventPropagation {
            match event {
                LoginFormEvent::Change { field, value } => {
                    if self.state.set_field(field, &value) {
                        EventPropagation::ConsumedRender
                    } else {
                        EventPropagation::Consumed
                    }
                }
                LoginFormEvent::Click => {
                    if !self.state.is_submit_enabled() {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "Ignoring click on disabled submit button",
                            phase = %self.state.request_phase()
                        );
                        return EventPropagation::Propagate;
                    }
                    self.submit();
                    EventPropagation::ConsumedRender
                }
            }
        }

        /// Idle -> Loading. Spawns the task that runs the fetch.
        fn submit(&mut self) {
            let Ok(runtime) = tokio::runtime::Handle::try_current() else {
                tracing::error!(
                    message = "Can't fetch current user without a tokio runtime"
                );
                self.fail_submission();
                return;
            };

            self.current_submission_id = self.current_submission_id.next();
            self.state.is_loading = true;
            self.state.has_error = false;

            let submission_id = self.current_submission_id;
            let future = self.fetcher.get_current_user();
            let sender = self.signal_sender.clone();

            // % is Display, ? is Debug.
            tracing::debug!(message = "📡 fetch current user", submission_id = %submission_id);

            let join_handle = runtime.spawn(async move {
                let result = future.await;
                let signal = LoginFormSignal::FetchCompleted {
                    submission_id,
                    result,
                };
                if sender.send(signal).await.is_err() {
                    tracing::debug!(
                        message = "LoginForm is gone, dropping fetch result",
                        submission_id = %submission_id
                    );
                }
            });

            self.maybe_in_flight = Some(join_handle);
        }

        /// Loading -> Success | Error.
        pub fn apply_signal(&mut self, signal: LoginFormSignal) -> EventPropagation {
            match signal {
                LoginFormSignal::FetchCompleted {
                    submission_id,
                    result,
                } => {
                    if submission_id != self.current_submission_id || !self.state.is_loading
                    {
                        // % is Display, ? is Debug.
                        tracing::warn!(
                            message = "Ignoring stale fetch result",
                            submission_id = %submission_id,
                            current_submission_id = %self.current_submission_id
                        );
                        return EventPropagation::Propagate;
                    }

                    self.state.is_loading = false;
                    self.maybe_in_flight = None;

                    match result {
                        Ok(user_record) => {
                            // % is Display, ? is Debug.
                            tracing::debug!(
                                message = "✅ fetched current user",
                                user = ?user_record
                            );
                            self.state.has_error = false;
                            self.state.maybe_user = Some(user_record);
                        }
                        Err(error) => {
                            // % is Display, ? is Debug.
                            tracing::error!(
                                message = "❌ could not fetch current user",
                                error = ?error
                            );
                            self.fail_submission();
                        }
                    }

                    EventPropagation::ConsumedRender
                }
            }
        }

        /// Any failure shows the error indicator and hides the previous user.
        fn fail_submission(&mut self) {
            self.state.is_loading = false;
            self.state.has_error = true;
            self.state.maybe_user = None;
        }
    }
}

mod render_impl {
    use super::*;

    impl LoginForm {
        #[must_use]
        pub fn render(&self) -> Document {
            let state = &self.state;

            let mut elements = vec![
                Element::new(
                    ElementId::UsernameInput,
                    ElementKind::TextInput {
                        placeholder: ui_str::USERNAME_PLACEHOLDER.into(),
                        value: state.get_field(FieldId::Username).into(),
                    },
                ),
                Element::new(
                    ElementId::PasswordInput,
                    ElementKind::PasswordInput {
                        placeholder: ui_str::PASSWORD_PLACEHOLDER.into(),
                        value: state.get_field(FieldId::Password).into(),
                    },
                ),
                Element::new(
                    ElementId::SubmitButton,
                    ElementKind::Button {
                        label: ui_str::submit_button_label(state.is_loading).into(),
                        disabled: !state.is_submit_enabled(),
                    },
                ),
                Element::new(
                    ElementId::ErrorIndicator,
                    ElementKind::Status {
                        test_id: ui_str::ERROR_TEST_ID.into(),
                        text: ui_str::ERROR_MESSAGE.into(),
                    },
                )
                .with_visible(state.has_error),
            ];

            if let Some(user_record) = &state.maybe_user {
                elements.push(Element::new(
                    ElementId::UserName,
                    ElementKind::Text {
                        text: user_record.name.clone(),
                    },
                ));
            }

            Document::new(elements)
        }
    }
}

impl Drop for LoginForm {
    fn drop(&mut self) {
        if let Some(join_handle) = self.maybe_in_flight.take() {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Unmounting LoginForm, aborting fetch in flight",
                submission_id = %self.current_submission_id
            );
            join_handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::{FetchError, RequestPhase, Role, StubUserFetcher, TextMatch, UserRecord,
                assert_eq2};

    fn new_form(
        fetcher: StubUserFetcher,
    ) -> (LoginForm, mpsc::Receiver<LoginFormSignal>) {
        let (sender, receiver) = mpsc::channel(8);
        (LoginForm::new(fetcher.into_safe(), sender), receiver)
    }

    fn fill_in(form: &mut LoginForm) {
        form.handle_event(LoginFormEvent::change(FieldId::Username, "test"));
        form.handle_event(LoginFormEvent::change(FieldId::Password, "password"));
    }

    #[tokio::test]
    async fn test_initial_render() {
        let (form, _receiver) =
            new_form(StubUserFetcher::resolves(UserRecord::new(1, "John")));
        let document = form.render();

        let button = document.get_by_role(Role::Button).unwrap();
        assert!(button.is_disabled());
        assert_eq2!(button.text_content(), "Login");
        assert!(!document.get_by_test_id("error").unwrap().is_visible());
        assert!(document.query_by_id(ElementId::UserName).is_none());
    }

    #[tokio::test]
    async fn test_change_returns_consumed_when_value_is_the_same() {
        let (mut form, _receiver) =
            new_form(StubUserFetcher::resolves(UserRecord::new(1, "John")));

        let it = form.handle_event(LoginFormEvent::change(FieldId::Username, "test"));
        assert_eq2!(it, EventPropagation::ConsumedRender);

        let it = form.handle_event(LoginFormEvent::change(FieldId::Username, "test"));
        assert_eq2!(it, EventPropagation::Consumed);
        assert_eq2!(form.state().username, "test");
    }

    #[tokio::test]
    async fn test_click_on_disabled_button_does_not_fetch() {
        let stub = StubUserFetcher::resolves(UserRecord::new(1, "John"));
        let (mut form, _receiver) = new_form(stub.clone());

        form.handle_event(LoginFormEvent::change(FieldId::Username, "test"));
        let it = form.handle_event(LoginFormEvent::Click);

        assert_eq2!(it, EventPropagation::Propagate);
        assert!(!form.state().is_loading);
        assert_eq2!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_click_then_success() {
        let stub = StubUserFetcher::resolves(UserRecord::new(1, "John"));
        let (mut form, mut receiver) = new_form(stub.clone());
        fill_in(&mut form);

        assert_eq2!(
            form.handle_event(LoginFormEvent::Click),
            EventPropagation::ConsumedRender
        );
        let document = form.render();
        let button = document.get_by_role(Role::Button).unwrap();
        assert!(TextMatch::ignore_case("please wait").matches(button.text_content()));
        assert!(button.is_disabled());

        let signal = receiver.recv().await.unwrap();
        assert_eq2!(form.apply_signal(signal), EventPropagation::ConsumedRender);

        let document = form.render();
        assert_eq2!(
            document.get_by_role(Role::Button).unwrap().text_content(),
            "Login"
        );
        assert!(document.get_by_text(&TextMatch::exact("John")).is_ok());
        assert!(!document.get_by_test_id("error").unwrap().is_visible());
        assert_eq2!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_click_then_failure() {
        let (mut form, mut receiver) = new_form(StubUserFetcher::rejects("boom"));
        fill_in(&mut form);
        form.handle_event(LoginFormEvent::Click);

        let signal = receiver.recv().await.unwrap();
        form.apply_signal(signal);

        let document = form.render();
        assert!(document.get_by_test_id("error").unwrap().is_visible());
        assert!(document.query_by_id(ElementId::UserName).is_none());
        assert!(!form.state().is_loading);
    }

    #[tokio::test]
    async fn test_second_click_while_loading_is_a_noop() {
        let stub = StubUserFetcher::resolves(UserRecord::new(1, "John")).with_gate();
        let (mut form, _receiver) = new_form(stub.clone());
        fill_in(&mut form);

        assert_eq2!(
            form.handle_event(LoginFormEvent::Click),
            EventPropagation::ConsumedRender
        );
        assert_eq2!(
            form.handle_event(LoginFormEvent::Click),
            EventPropagation::Propagate
        );
        assert_eq2!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_stale_signal_is_ignored() {
        let (mut form, _receiver) =
            new_form(StubUserFetcher::resolves(UserRecord::new(1, "John")));

        let it = form.apply_signal(LoginFormSignal::FetchCompleted {
            submission_id: SubmissionId(42),
            result: Err(FetchError::Rejected {
                reason: "stale".into(),
            }),
        });

        assert_eq2!(it, EventPropagation::Propagate);
        assert!(!form.state().has_error);
    }

    #[tokio::test]
    async fn test_signal_from_superseded_submission_is_ignored() {
        let stub = StubUserFetcher::resolves(UserRecord::new(1, "John"));
        let (mut form, mut receiver) = new_form(stub);
        fill_in(&mut form);

        form.handle_event(LoginFormEvent::Click);
        let first_signal = receiver.recv().await.unwrap();
        form.apply_signal(first_signal);

        // Submission #2 is now loading.
        form.handle_event(LoginFormEvent::Click);
        assert!(form.state().is_loading);

        let it = form.apply_signal(LoginFormSignal::FetchCompleted {
            submission_id: SubmissionId(1),
            result: Err(FetchError::Rejected {
                reason: "late".into(),
            }),
        });
        assert_eq2!(it, EventPropagation::Propagate);
        assert!(form.state().is_loading);
        assert!(!form.state().has_error);

        let second_signal = receiver.recv().await.unwrap();
        assert_eq2!(form.apply_signal(second_signal), EventPropagation::ConsumedRender);
        assert_eq2!(form.state().request_phase(), RequestPhase::Success);
    }

    #[test]
    fn test_click_without_runtime_after_success_hides_user() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (mut form, mut receiver) =
            new_form(StubUserFetcher::resolves(UserRecord::new(1, "John")));
        fill_in(&mut form);

        runtime.block_on(async {
            form.handle_event(LoginFormEvent::Click);
            let signal = receiver.recv().await.unwrap();
            form.apply_signal(signal);
        });
        assert!(form.render().get_by_text(&TextMatch::exact("John")).is_ok());

        // Outside of `block_on` there is no current runtime.
        form.handle_event(LoginFormEvent::Click);

        let document = form.render();
        assert!(document.get_by_test_id("error").unwrap().is_visible());
        assert!(
            document
                .query_by_text(&TextMatch::exact("John"))
                .unwrap()
                .is_none()
        );
        assert_eq2!(form.state().request_phase(), RequestPhase::Error);
    }

    #[test]
    fn test_click_without_runtime_shows_error() {
        let (sender, _receiver) = mpsc::channel(8);
        let stub = StubUserFetcher::resolves(UserRecord::new(1, "John"));
        let mut form = LoginForm::new(stub.clone().into_safe(), sender);
        fill_in(&mut form);

        form.handle_event(LoginFormEvent::Click);

        assert!(form.state().has_error);
        assert!(!form.state().is_loading);
        assert_eq2!(stub.call_count(), 0);
    }
}
