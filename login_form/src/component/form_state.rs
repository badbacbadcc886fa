// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::UserRecord;

/// The two inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumIter,
         strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum FieldId {
    Username,
    Password,
}

/// Identifies one submission cycle. Completion signals carry the id of the submission
/// that started them, so a signal from an older cycle is never applied to a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SubmissionId(pub u64);

impl SubmissionId {
    #[must_use]
    pub fn next(self) -> Self { Self(self.0 + 1) }
}

impl Display for SubmissionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the current submission is at. This is derived from the flags in
/// [`FormState`], it is not stored.
///
/// ```text
/// Idle ──click──▶ Loading ──resolved──▶ Success
///                    │
///                    └────rejected───▶ Error
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum RequestPhase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Component local state. It is owned by exactly one [`crate::LoginForm`] and only
/// mutated by its event and signal handlers. A new form starts from
/// [`FormState::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub is_loading: bool,
    pub has_error: bool,
    pub maybe_user: Option<UserRecord>,
}

impl FormState {
    #[must_use]
    pub fn get_field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Username => &self.username,
            FieldId::Password => &self.password,
        }
    }

    /// Returns `true` if the value actually changed.
    pub fn set_field(&mut self, field: FieldId, value: &str) -> bool {
        let slot = match field {
            FieldId::Username => &mut self.username,
            FieldId::Password => &mut self.password,
        };
        if slot.as_str() == value {
            return false;
        }
        value.clone_into(slot);
        true
    }

    /// Both inputs must be non-empty, and no fetch can be in flight.
    #[must_use]
    pub fn is_submit_enabled(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty() && !self.is_loading
    }

    #[must_use]
    pub fn request_phase(&self) -> RequestPhase {
        if self.is_loading {
            RequestPhase::Loading
        } else if self.has_error {
            RequestPhase::Error
        } else if self.maybe_user.is_some() {
            RequestPhase::Success
        } else {
            RequestPhase::Idle
        }
    }
}
