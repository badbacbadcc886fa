// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_login_form::{CLIArg, CommonResult, TracingConfig, run_app,
                      setup_default_miette_global_report_handler, show_exit_message,
                      throws};
use tracing_core::LevelFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

// Note: The `tokio::main` macro internally calls `.expect("Failed building the Runtime")`
// when initializing the Tokio runtime. This is unavoidable and safe, as runtime creation
// failure is a fatal error that should panic. The lint must be suppressed here.
#[tokio::main]
#[allow(clippy::unwrap_in_result)]
async fn main() -> CommonResult<()> {
    throws!({
        setup_default_miette_global_report_handler(ISSUES_URL);

        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        if enable_logging {
            TracingConfig::new_file(None, LevelFilter::DEBUG).install_global()?;
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Start logging...",
                url = %cli_arg.url,
                offline = cli_arg.offline,
                timeout_secs = ?cli_arg.timeout_secs
            );
        }

        let maybe_user = run_app(cli_arg).await?;
        if let Some(user) = maybe_user {
            tracing::debug!(message = "Logged in", user = ?user);
        }

        show_exit_message();

        if enable_logging {
            tracing::debug!(message = "Stop logging...");
        }
    })
}
