// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Every way that fetching the current user can fail. The [`crate::LoginForm`] treats
/// all of them the same way: it shows its error indicator. The variants exist so that
/// the failure can be logged with enough detail to be useful.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum FetchError {
    #[error("📡 Could not send GET request to '{url}'")]
    #[diagnostic(code(login_form::fetch::request))]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("📡 GET request to '{url}' failed with status {status}")]
    #[diagnostic(code(login_form::fetch::http_status))]
    HttpStatus { url: String, status: u16 },

    #[error("📦 Could not decode user record from '{url}'")]
    #[diagnostic(code(login_form::fetch::decode))]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("🚫 Fetch was rejected: {reason}")]
    #[diagnostic(code(login_form::fetch::rejected))]
    Rejected { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_error_messages() {
        let it = FetchError::HttpStatus {
            url: "http://localhost/user".into(),
            status: 500,
        };
        assert_eq2!(
            it.to_string(),
            "📡 GET request to 'http://localhost/user' failed with status 500"
        );

        let it = FetchError::Rejected {
            reason: "offline".into(),
        };
        assert_eq2!(it.to_string(), "🚫 Fetch was rejected: offline");
    }
}
