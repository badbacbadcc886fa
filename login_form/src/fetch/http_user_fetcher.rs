// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use miette::{IntoDiagnostic, WrapErr};
use reqwest::Client;

use crate::{FetchCurrentUser, FetchError, PinnedFetchFuture, UserRecord};

/// Public endpoint that returns a user record shaped like [`UserRecord`] (plus a lot of
/// extra fields, which are ignored).
pub const DEFAULT_CURRENT_USER_URL: &str = "https://jsonplaceholder.typicode.com/users/1";

/// Fetch the current user with a GET request to `url`, and decode the JSON body into a
/// [`UserRecord`]. Any non 2xx status is a failure.
///
/// [Client] is cheap to clone (it is an [`std::sync::Arc`] internally), so each call to
/// [`FetchCurrentUser::get_current_user`] clones it into the returned future.
#[derive(Debug, Clone)]
pub struct HttpUserFetcher {
    client: Client,
    url: String,
}

impl HttpUserFetcher {
    /// If `maybe_timeout` is [None] the request can take forever, and the form will
    /// show `Please wait...` until it completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend can't be initialized.
    pub fn new(url: impl Into<String>, maybe_timeout: Option<Duration>) -> miette::Result<Self> {
        let client = {
            let mut builder = Client::builder();
            if let Some(timeout) = maybe_timeout {
                builder = builder.timeout(timeout);
            }
            builder
                .build()
                .into_diagnostic()
                .wrap_err("Could not create HTTP client")?
        };

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str { &self.url }
}

impl FetchCurrentUser for HttpUserFetcher {
    fn get_current_user(&self) -> PinnedFetchFuture {
        let client = self.client.clone();
        let url = self.url.clone();
        Box::pin(make_get_request(client, url))
    }
}

#[tracing::instrument(skip(client))]
async fn make_get_request(client: Client, url: String) -> Result<UserRecord, FetchError> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        // % is Display, ? is Debug.
        tracing::error!(message = "GET request failed", url = %url, status = %status);
        return Err(FetchError::HttpStatus {
            url,
            status: status.as_u16(),
        });
    }

    let user_record = response
        .json::<UserRecord>()
        .await
        .map_err(|source| FetchError::Decode {
            url: url.clone(),
            source,
        })?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "GET request succeeded", url = %url, user = ?user_record);

    Ok(user_record)
}
