// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::{CommonResult, Element, ElementId, ElementKind, LoginFormError, Role,
            TextMatch};

/// The output of a render. It is an ordered list of [`Element`]s, with queries modeled
/// after `@testing-library`:
/// - `get_by_*` fail if there isn't exactly one match.
/// - `query_by_*` return [None] if there's no match, and fail if there's more than one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub elements: Vec<Element>,
}

impl Document {
    #[must_use]
    pub fn new(elements: Vec<Element>) -> Self { Self { elements } }

    /// # Errors
    ///
    /// Returns [`LoginFormError::ElementNotFound`] or
    /// [`LoginFormError::MultipleElementsFound`].
    pub fn get_by_placeholder_text(&self, text_match: &TextMatch) -> CommonResult<&Element> {
        self.get_one(format!("placeholder {text_match}"), |it| {
            it.placeholder().is_some_and(|p| text_match.matches(p))
        })
    }

    /// # Errors
    ///
    /// Returns [`LoginFormError::ElementNotFound`] or
    /// [`LoginFormError::MultipleElementsFound`].
    pub fn get_by_role(&self, role: Role) -> CommonResult<&Element> {
        self.get_one(format!("role {role}"), |it| it.role() == Some(role))
    }

    /// # Errors
    ///
    /// Returns [`LoginFormError::ElementNotFound`] or
    /// [`LoginFormError::MultipleElementsFound`].
    pub fn get_by_test_id(&self, test_id: &str) -> CommonResult<&Element> {
        self.get_one(format!("test id {test_id:?}"), |it| it.test_id() == Some(test_id))
    }

    /// # Errors
    ///
    /// Returns [`LoginFormError::ElementNotFound`] or
    /// [`LoginFormError::MultipleElementsFound`].
    pub fn get_by_text(&self, text_match: &TextMatch) -> CommonResult<&Element> {
        self.get_one(format!("text {text_match}"), |it| {
            text_match.matches(it.text_content())
        })
    }

    /// # Errors
    ///
    /// Returns [`LoginFormError::MultipleElementsFound`].
    pub fn query_by_text(&self, text_match: &TextMatch) -> CommonResult<Option<&Element>> {
        self.query_one(format!("text {text_match}"), |it| {
            text_match.matches(it.text_content())
        })
    }

    /// # Errors
    ///
    /// Returns [`LoginFormError::ElementNotFound`].
    pub fn get_by_id(&self, id: ElementId) -> CommonResult<&Element> {
        self.get_one(format!("id {id}"), |it| it.id == id)
    }

    #[must_use]
    pub fn query_by_id(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|it| it.id == id)
    }

    fn get_one(
        &self,
        query: String,
        predicate: impl Fn(&Element) -> bool,
    ) -> CommonResult<&Element> {
        match self.query_one(query.clone(), predicate)? {
            Some(element) => Ok(element),
            None => Err(LoginFormError::ElementNotFound { query }.into()),
        }
    }

    fn query_one(
        &self,
        query: String,
        predicate: impl Fn(&Element) -> bool,
    ) -> CommonResult<Option<&Element>> {
        let matches: Vec<&Element> =
            self.elements.iter().filter(|it| predicate(*it)).collect();
        match matches.as_slice() {
            [] => Ok(None),
            [element] => Ok(Some(*element)),
            _ => Err(LoginFormError::MultipleElementsFound {
                query,
                count: matches.len(),
            }
            .into()),
        }
    }
}

/// Plain text rendering. Hidden elements are skipped and password values are masked.
impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for element in self.elements.iter().filter(|it| it.is_visible()) {
            match &element.kind {
                ElementKind::TextInput { placeholder, value } => {
                    writeln!(f, "{placeholder}: [{value}]")?;
                }
                ElementKind::PasswordInput { placeholder, value } => {
                    let masked = "*".repeat(value.chars().count());
                    writeln!(f, "{placeholder}: [{masked}]")?;
                }
                ElementKind::Button { label, disabled } => {
                    let suffix = if *disabled { " (disabled)" } else { "" };
                    writeln!(f, "< {label} >{suffix}")?;
                }
                ElementKind::Status { text, .. } | ElementKind::Text { text } => {
                    writeln!(f, "{text}")?;
                }
            }
        }
        Ok(())
    }
}
