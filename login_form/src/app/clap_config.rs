// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use clap::{Args, Parser};

use crate::DEFAULT_CURRENT_USER_URL;

#[derive(Debug, Parser)]
#[command(bin_name = "login")]
#[command(about = "🔐 Log in and fetch the current user")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  login [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n"
)]
pub struct CLIArg {
    #[arg(
        long,
        default_value = DEFAULT_CURRENT_USER_URL,
        help = "URL that returns the current user as JSON, eg: {\"id\": 1, \"name\": \"John\"}"
    )]
    pub url: String,

    #[arg(long, help = "Username to log in with. If missing, you will be prompted")]
    pub username: Option<String>,

    #[arg(long, help = "Password to log in with. If missing, you will be prompted")]
    pub password: Option<String>,

    #[arg(
        long,
        short = 't',
        help = "Give up on the request after this many seconds. Waits forever if missing"
    )]
    pub timeout_secs: Option<u64>,

    #[arg(
        long,
        help = "Don't make a network request, the current user is always \"John\""
    )]
    pub offline: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

impl CLIArg {
    #[must_use]
    pub fn maybe_timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_clap_config_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_defaults() {
        let it = CLIArg::try_parse_from(["login"]).unwrap();
        assert_eq2!(it.url, DEFAULT_CURRENT_USER_URL);
        assert_eq2!(it.username, None);
        assert_eq2!(it.maybe_timeout(), None);
        assert!(!it.offline);
        assert!(!it.global_options.enable_logging);
    }

    #[test]
    fn test_all_args() {
        let it = CLIArg::try_parse_from([
            "login",
            "--url",
            "http://localhost:3000/me",
            "--username",
            "test",
            "--password",
            "secret",
            "-t",
            "5",
            "--offline",
            "-l",
        ])
        .unwrap();
        assert_eq2!(it.url, "http://localhost:3000/me");
        assert_eq2!(it.username.as_deref(), Some("test"));
        assert_eq2!(it.password.as_deref(), Some("secret"));
        assert_eq2!(it.maybe_timeout(), Some(Duration::from_secs(5)));
        assert!(it.offline);
        assert!(it.global_options.enable_logging);
    }
}
