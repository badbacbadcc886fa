// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{FetchError, FieldId, SubmissionId, UserRecord};

/// Input events that the owner of a [`crate::LoginForm`] routes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFormEvent {
    /// The value of an input changed (eg: the user typed into it).
    Change { field: FieldId, value: String },
    /// The submit button was activated.
    Click,
}

impl LoginFormEvent {
    pub fn change(field: FieldId, value: impl Into<String>) -> Self {
        Self::Change {
            field,
            value: value.into(),
        }
    }
}

/// Signals sent from tasks spawned by a [`crate::LoginForm`] back to its owner, who
/// must pass them to [`crate::LoginForm::apply_signal`].
#[derive(Debug)]
pub enum LoginFormSignal {
    FetchCompleted {
        submission_id: SubmissionId,
        result: Result<UserRecord, FetchError>,
    },
}

/// What happened to an event or signal after it was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPropagation {
    /// Handled, and the state changed, so re-render.
    ConsumedRender,
    /// Handled, nothing changed.
    Consumed,
    /// Not handled (eg: click on a disabled button, or a stale signal).
    Propagate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_change_constructor() {
        assert_eq2!(
            LoginFormEvent::change(FieldId::Username, "test"),
            LoginFormEvent::Change {
                field: FieldId::Username,
                value: "test".to_string()
            }
        );
    }
}
