// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stove builder.

use std::time::Duration;

use reqwest::Client;

use crate::device::Stove;
use crate::protocol::{HttpClient, HttpConfig};

/// Builder for [`Stove`].
///
/// Created with [`Stove::builder`] (MAC and PIN) or [`Stove::from_config`]
/// (a prepared [`HttpConfig`]).
///
/// # Examples
///
/// ```
/// use fumis_lib::Stove;
/// use std::time::Duration;
///
/// let stove = Stove::builder("AABBCCDDEEFF", "1234")
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("MyApp/1.0")
///     .build();
///
/// assert!(stove.info().is_none());
/// ```
#[derive(Debug)]
pub struct StoveBuilder {
    config: HttpConfig,
    client: Option<Client>,
}

impl StoveBuilder {
    /// Creates a new builder with the specified configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Sends requests through a caller-owned reqwest client.
    ///
    /// The stove never releases it; [`Stove::close`] only drops sessions the
    /// stove created itself. The configured timeout still bounds every
    /// request.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the request timeout (default 10 seconds).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.with_user_agent(user_agent);
        self
    }

    /// Points the stove at another API endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(base_url);
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the stove.
    ///
    /// No request is sent; without a client from
    /// [`with_client`](Self::with_client), the session is created on first
    /// use or by [`Stove::open`].
    #[must_use]
    pub fn build(self) -> Stove<HttpClient> {
        let protocol = match self.client {
            Some(client) => HttpClient::with_shared_client(self.config, client),
            None => HttpClient::new(self.config),
        };
        Stove::with_protocol(protocol)
    }
}
