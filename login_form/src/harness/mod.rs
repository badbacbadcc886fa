// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod login_form_harness;

// Re-export.
pub use login_form_harness::*;
