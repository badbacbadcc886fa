// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

/// How to match text (placeholder, text content) when querying a [`crate::Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    /// The whole string must be equal, after trimming whitespace.
    Exact(String),
    /// The string must contain the needle, ignoring case. Eg: `please wait` matches
    /// `Please wait...`.
    IgnoreCaseContains(String),
}

impl TextMatch {
    pub fn exact(it: impl Into<String>) -> Self { Self::Exact(it.into()) }

    pub fn ignore_case(it: impl Into<String>) -> Self {
        Self::IgnoreCaseContains(it.into())
    }

    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            Self::Exact(needle) => haystack.trim() == needle.trim(),
            Self::IgnoreCaseContains(needle) => haystack
                .to_lowercase()
                .contains(needle.to_lowercase().as_str()),
        }
    }
}

impl Display for TextMatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(needle) => write!(f, "{needle:?}"),
            Self::IgnoreCaseContains(needle) => write!(f, "/{needle}/i"),
        }
    }
}
