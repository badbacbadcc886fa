// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Stable ids for every element the [`crate::LoginForm`] can render. A
/// [`crate::Document`] is a snapshot, so tests re-query by id (or by placeholder, role,
/// etc) after each event instead of holding on to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum ElementId {
    #[strum(serialize = "username_input")]
    UsernameInput,
    #[strum(serialize = "password_input")]
    PasswordInput,
    #[strum(serialize = "submit_button")]
    SubmitButton,
    #[strum(serialize = "error_indicator")]
    ErrorIndicator,
    #[strum(serialize = "user_name")]
    UserName,
}

/// Accessibility role of an element. Password inputs have no role, same as in a
/// browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    TextBox,
    Button,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    TextInput { placeholder: String, value: String },
    PasswordInput { placeholder: String, value: String },
    Button { label: String, disabled: bool },
    /// `test_id` is how tests find this element (`data-testid` in a browser).
    Status { test_id: String, text: String },
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    /// An element that isn't visible is still in the document (it can be found by
    /// queries), it is just not shown.
    pub visible: bool,
}

impl Element {
    #[must_use]
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self {
            id,
            kind,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self.kind {
            ElementKind::TextInput { .. } => Some(Role::TextBox),
            ElementKind::Button { .. } => Some(Role::Button),
            ElementKind::Status { .. } => Some(Role::Status),
            ElementKind::PasswordInput { .. } | ElementKind::Text { .. } => None,
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::TextInput { placeholder, .. }
            | ElementKind::PasswordInput { placeholder, .. } => Some(placeholder),
            _ => None,
        }
    }

    /// Only inputs have a value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::TextInput { value, .. }
            | ElementKind::PasswordInput { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Inputs have no text content, their text is in [`Self::value`].
    #[must_use]
    pub fn text_content(&self) -> &str {
        match &self.kind {
            ElementKind::Button { label, .. } => label,
            ElementKind::Status { text, .. } | ElementKind::Text { text } => text,
            ElementKind::TextInput { .. } | ElementKind::PasswordInput { .. } => "",
        }
    }

    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Status { test_id, .. } => Some(test_id),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        matches!(self.kind, ElementKind::Button { disabled: true, .. })
    }

    #[must_use]
    pub fn is_visible(&self) -> bool { self.visible }
}
