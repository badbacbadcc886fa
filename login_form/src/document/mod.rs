// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod document_struct;
pub mod element;
pub mod text_match;

// Re-export.
pub use document_struct::*;
pub use element::*;
pub use text_match::*;
