// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Stylize;

use crate::{Document, ElementKind};

/// Render a [`Document`] with colors, one element per line. Hidden elements are skipped
/// and the password is masked, same as the plain [`std::fmt::Display`] impl.
#[must_use]
pub fn styled_document(document: &Document) -> String {
    let mut lines = Vec::with_capacity(document.elements.len());

    for element in document.elements.iter().filter(|it| it.is_visible()) {
        let line = match &element.kind {
            ElementKind::TextInput { placeholder, value } => {
                format!(" {} {}", format!("{placeholder}:").dark_grey(), value.clone().cyan())
            }
            ElementKind::PasswordInput { placeholder, value } => {
                let masked = "*".repeat(value.chars().count());
                format!(" {} {}", format!("{placeholder}:").dark_grey(), masked.cyan())
            }
            ElementKind::Button { label, disabled } => {
                let button = format!("[ {label} ]");
                if *disabled {
                    format!(" {}", button.dark_grey())
                } else {
                    format!(" {}", button.magenta().bold())
                }
            }
            ElementKind::Status { text, .. } => format!(" {}", text.clone().red().bold()),
            ElementKind::Text { text } => {
                format!(" 👋 {}", text.clone().green().bold())
            }
        };
        lines.push(line);
    }

    lines.join("\n")
}

pub fn show_exit_message() {
    println!(" {}", "Goodbye 👋".dark_grey());
}
