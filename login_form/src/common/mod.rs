// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_result;
pub mod login_form_error;
pub mod miette_setup_global_report_handler;
pub mod temp_dir;

// Re-export.
pub use common_result::*;
pub use login_form_error::*;
pub use miette_setup_global_report_handler::*;
pub use temp_dir::*;
