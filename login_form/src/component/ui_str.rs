// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const USERNAME_PLACEHOLDER: &str = "username";
pub const PASSWORD_PLACEHOLDER: &str = "password";
pub const LOGIN_LABEL: &str = "Login";
pub const PLEASE_WAIT_LABEL: &str = "Please wait...";
pub const ERROR_TEST_ID: &str = "error";
pub const ERROR_MESSAGE: &str = "Something went wrong!";

#[must_use]
pub fn submit_button_label(is_loading: bool) -> &'static str {
    if is_loading { PLEASE_WAIT_LABEL } else { LOGIN_LABEL }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_submit_button_label() {
        assert_eq2!(submit_button_label(false), "Login");
        assert_eq2!(submit_button_label(true), "Please wait...");
    }
}
