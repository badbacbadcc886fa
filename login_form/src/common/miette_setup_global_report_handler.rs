// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::MietteHandlerOpts;

/// Fallback width when the terminal size can't be detected (eg: output is piped).
pub const DEFAULT_REPORT_WIDTH: u16 = 80;

/// Register a graphical [miette] report handler, used when `main()` returns an error.
///
/// The hook is lazy: the terminal width is only measured when a report is actually
/// displayed.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| columns);
            tracing::debug!(message = "miette::set_hook", terminal_width = it);
            usize::from(it)
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
