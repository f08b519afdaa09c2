// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request engine for the WiRCU cloud API.
//!
//! - [`HttpConfig`]: endpoint, credentials, timeout and user agent
//! - [`HttpClient`]: performs one authenticated exchange per call
//! - [`Envelope`]: the authenticated body of control requests
//!
//! The API exposes a single resource:
//!
//! | Request | Purpose |
//! |---------|---------|
//! | `GET /v1/status` | Full status document |
//! | `POST /v1/status/` | Control call, body is an [`Envelope`] |

mod envelope;
mod http;

use std::fmt;

pub use envelope::{API_VERSION, Envelope};
pub use http::{Credentials, HttpClient, HttpConfig};

use serde_json::{Map, Value};

use crate::error::Error;

/// Path of the status document.
pub const STATUS_PATH: &str = "/v1/status";

/// Path of the control endpoint.
pub const CONTROL_PATH: &str = "/v1/status/";

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Read request, no body.
    #[default]
    Get,
    /// Write request carrying an [`Envelope`].
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// Transport used by [`Stove`](crate::Stove) to reach the API.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Performs one exchange and returns the decoded JSON body.
    ///
    /// Returns `None` for a successful response with an empty body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if no complete response was received
    /// and [`Error::Api`] if the response was rejected.
    async fn request(
        &self,
        path: &str,
        method: Method,
        payload: Option<&Map<String, Value>>,
    ) -> Result<Option<Value>, Error>;
}
