// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::Deref,
          path::{Path, PathBuf}};

use miette::IntoDiagnostic;

/// A folder under [`std::env::temp_dir`] that is deleted when this struct is dropped.
/// Used by tests that write log files.
#[derive(Debug)]
pub struct TempDir {
    inner: PathBuf,
}

/// Create a temporary directory with a random name.
///
/// # Errors
///
/// Returns an error if the directory can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(format!("r3bl_login_form_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Deref for TempDir {
    type Target = Path;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if let Err(error) = std::fs::remove_dir_all(&self.inner) {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "Could not remove temp dir",
                path = %self.inner.display(),
                error = ?error
            );
        }
    }
}
