// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `fumis_lib` library.
//!
//! Every failure is an [`Error`], which is either a [`ConnectionError`]
//! (the exchange never completed) or an [`ApiError`] (the API answered with
//! something this library cannot accept). Match on the variant to handle the
//! two kinds separately, or propagate `Error` to handle them together.

use std::time::Duration;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be completed: timeout, DNS, connect or
    /// transport failure.
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// The API answered, but with an error status, a wrong content type or
    /// an undecodable body.
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

impl Error {
    /// Returns `true` if this is a connection failure.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if this is an API failure.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

/// Errors raised before a complete response was received.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The exchange did not finish within the configured timeout.
    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// The HTTP transport failed (DNS, connect, TLS, body read...).
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ConnectionError {
    /// Classifies a reqwest error, keeping timeouts distinguishable.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Transport(err)
        }
    }
}

/// Errors describing a response the API sent but that cannot be used.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP status was outside the success range.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response was not declared as JSON.
    #[error("unexpected content type {content_type:?} (HTTP {status}): {body}")]
    ContentType {
        /// HTTP status code.
        status: u16,
        /// The `Content-Type` header value, empty when missing.
        content_type: String,
        /// Raw response body.
        body: String,
    },

    /// The body was declared as JSON but could not be decoded.
    #[error("invalid JSON body (HTTP {status}): {source}")]
    Json {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// The status document was empty or its root was not a JSON object.
    #[error("unexpected status document: {body:?}")]
    UnexpectedDocument {
        /// The document as received, empty when there was no body.
        body: String,
    },
}

impl ApiError {
    /// Returns the HTTP status code of the failed response, if known.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. }
            | Self::ContentType { status, .. }
            | Self::Json { status, .. } => Some(*status),
            Self::UnexpectedDocument { .. } => None,
        }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Status { body, .. }
            | Self::ContentType { body, .. }
            | Self::Json { body, .. }
            | Self::UnexpectedDocument { body } => body,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
