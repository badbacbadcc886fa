// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Stylize;
use miette::IntoDiagnostic;
use strum::IntoEnumIterator;
use tokio::{io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
            sync::mpsc};

use crate::{CLIArg, CommonResult, EventPropagation, FieldId, HttpUserFetcher, LoginForm,
            LoginFormEvent, RequestPhase, SIGNAL_CHANNEL_SIZE, SafeUserFetcher,
            StubUserFetcher, UserRecord, styled_document};

/// The user that `--offline` mode always resolves with.
#[must_use]
pub fn offline_user() -> UserRecord { UserRecord::new(1, "John") }

/// # Errors
///
/// Returns an error if the HTTP client can't be created.
pub fn create_fetcher(cli_arg: &CLIArg) -> CommonResult<SafeUserFetcher> {
    if cli_arg.offline {
        return Ok(StubUserFetcher::resolves(offline_user()).into_safe());
    }
    let it = HttpUserFetcher::new(cli_arg.url.clone(), cli_arg.maybe_timeout())?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Using HTTP fetcher", url = %it.url());
    Ok(std::sync::Arc::new(it))
}

/// Run the login form in the terminal:
/// 1. Fill in the inputs from the command line, or prompt for them.
/// 2. Click the submit button, and wait for the fetch to complete.
/// 3. Print the form after each step.
///
/// Returns the fetched user, or [None] if the form could not be submitted (eg: an input
/// was left empty). A failed fetch is reported with the form's error indicator, and
/// also returned as an error so the process exits with a non zero code.
///
/// # Errors
///
/// Returns an error if stdin / stdout can't be used, or the fetch failed.
pub async fn run_app(cli_arg: CLIArg) -> CommonResult<Option<UserRecord>> {
    let fetcher = create_fetcher(&cli_arg)?;
    let (signal_sender, mut signal_receiver) = mpsc::channel(SIGNAL_CHANNEL_SIZE);
    let mut form = LoginForm::new(fetcher, signal_sender);

    let mut stdin_lines = BufReader::new(tokio::io::stdin()).lines();

    for field in FieldId::iter() {
        let maybe_value = match field {
            FieldId::Username => cli_arg.username.clone(),
            FieldId::Password => cli_arg.password.clone(),
        };
        let value = match maybe_value {
            Some(value) => value,
            None => {
                prompt(field).await?;
                stdin_lines
                    .next_line()
                    .await
                    .into_diagnostic()?
                    .unwrap_or_default()
            }
        };
        form.handle_event(LoginFormEvent::change(field, value));
    }

    print_form(&form);

    if form.handle_event(LoginFormEvent::Click) == EventPropagation::Propagate {
        println!(
            " {}",
            "Both username and password are required to log in.".yellow()
        );
        return Ok(None);
    }

    print_form(&form);

    while form.state().request_phase() == RequestPhase::Loading {
        tokio::select! {
            maybe_signal = signal_receiver.recv() => {
                match maybe_signal {
                    Some(signal) => {
                        form.apply_signal(signal);
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!(message = "Ctrl+C pressed while loading");
                return Ok(None);
            }
        }
    }

    print_form(&form);

    match form.state().request_phase() {
        RequestPhase::Success => Ok(form.state().maybe_user.clone()),
        _ => Err(miette::miette!(
            help = "Run with `--enable-logging` and check `log.txt` for details",
            "Could not fetch the current user"
        )),
    }
}

async fn prompt(field: FieldId) -> CommonResult<()> {
    let mut stdout = tokio::io::stdout();
    let text = format!(" {} ", format!("{field}:").bold());
    stdout.write_all(text.as_bytes()).await.into_diagnostic()?;
    stdout.flush().await.into_diagnostic()
}

fn print_form(form: &LoginForm) {
    println!("{}\n", styled_document(&form.render()));
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::assert_eq2;

    #[tokio::test]
    async fn test_run_app_offline() {
        let cli_arg = CLIArg::try_parse_from([
            "login",
            "--offline",
            "--username",
            "test",
            "--password",
            "secret",
        ])
        .unwrap();

        let it = run_app(cli_arg).await.unwrap();
        assert_eq2!(it, Some(offline_user()));
    }

    #[tokio::test]
    async fn test_run_app_with_empty_password_does_not_submit() {
        let cli_arg = CLIArg::try_parse_from([
            "login",
            "--offline",
            "--username",
            "test",
            "--password",
            "",
        ])
        .unwrap();

        let it = run_app(cli_arg).await.unwrap();
        assert_eq2!(it, None);
    }

    #[test]
    fn test_create_fetcher() {
        let cli_arg = CLIArg::try_parse_from(["login", "--url", "http://localhost/me"])
            .unwrap();
        assert!(create_fetcher(&cli_arg).is_ok());
    }
}
