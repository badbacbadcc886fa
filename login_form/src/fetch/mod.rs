// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod fetch_current_user;
pub mod fetch_error;
pub mod http_user_fetcher;
pub mod stub_user_fetcher;
pub mod user_record;

// Re-export.
pub use fetch_current_user::*;
pub use fetch_error::*;
pub use http_user_fetcher::*;
pub use stub_user_fetcher::*;
pub use user_record::*;
