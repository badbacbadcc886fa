// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod form_state;
pub mod login_form_component;
pub mod login_form_event;
pub mod ui_str;

// Re-export.
pub use form_state::*;
pub use login_form_component::*;
pub use login_form_event::*;
pub use ui_str::*;
