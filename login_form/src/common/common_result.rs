// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Type alias to make it easy to work with [`Result`]s. Errors are reported using
/// [miette], so any error type that implements [`miette::Diagnostic`] (like
/// [`crate::LoginFormError`] and [`crate::FetchError`]) can be returned with `?`.
pub type CommonResult<T> = miette::Result<T>;

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of each block.
///
/// ```
/// use r3bl_login_form::{CommonResult, throws};
///
/// fn test_simple_2_col_layout() -> CommonResult<()> {
///     throws!({
///         let _it = 1 + 1;
///     });
/// }
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Syntactic sugar for `Ok(())` or `Ok(value)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Wrapper for [`pretty_assertions::assert_eq!`] so that diffs of large structs (like a
/// rendered [`crate::Document`]) are readable when a test fails.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn returns_unit() -> CommonResult<()> {
        throws!({
            let _it = 1 + 1;
        });
    }

    fn returns_value() -> CommonResult<u8> { ok!(42) }

    #[test]
    fn test_throws_and_ok() {
        assert!(returns_unit().is_ok());
        assert_eq2!(returns_value().unwrap(), 42);
    }
}
