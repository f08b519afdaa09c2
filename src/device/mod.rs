// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level stove abstraction.
//!
//! [`Stove`] is the entry point of the library: it reads the status
//! document, keeps the last snapshot and sends control commands.
//!
//! ```no_run
//! use fumis_lib::Stove;
//!
//! # async fn example() -> fumis_lib::Result<()> {
//! let stove = Stove::new("AABBCCDDEEFF", "1234");
//!
//! let info = stove.update_info().await?;
//! println!("{}: {} °C (target {} °C)", info.status(), info.temperature(), info.target_temperature());
//!
//! stove.set_target_temperature(22.5).await?;
//! stove.turn_on().await?;
//! stove.close();
//! # Ok(())
//! # }
//! ```

mod builder;
mod session;

pub use builder::StoveBuilder;
pub use session::SessionGuard;

use parking_lot::RwLock;
use serde_json::Value;

use crate::command::{Command, EcoModeCommand, PowerCommand, TargetTemperatureCommand};
use crate::error::{ApiError, Error};
use crate::protocol::{CONTROL_PATH, HttpClient, HttpConfig, Method, Protocol, STATUS_PATH};
use crate::response::Info;
use crate::types::EcoMode;

/// A Fumis stove reached through its WiRCU unit.
///
/// Each operation performs exactly one request. Operations take `&self` and
/// are not serialized against each other: concurrent
/// [`update_info`](Self::update_info) calls race and the last one to finish
/// sets the cached snapshot.
///
/// # Type Parameter
///
/// `P` is the transport, [`HttpClient`] unless a custom [`Protocol`] is
/// given to [`Stove::with_protocol`].
#[derive(Debug)]
pub struct Stove<P: Protocol = HttpClient> {
    protocol: P,
    info: RwLock<Option<Info>>,
}

impl Stove<HttpClient> {
    /// Returns a builder for the unit `mac` protected by `password`.
    #[must_use]
    pub fn builder(mac: impl Into<String>, password: impl Into<String>) -> StoveBuilder {
        StoveBuilder::new(HttpConfig::new(mac, password))
    }

    /// Returns a builder starting from a prepared configuration.
    #[must_use]
    pub fn from_config(config: HttpConfig) -> StoveBuilder {
        StoveBuilder::new(config)
    }

    /// Creates a stove with default settings.
    #[must_use]
    pub fn new(mac: impl Into<String>, password: impl Into<String>) -> Self {
        Self::builder(mac, password).build()
    }

    /// Opens the HTTP session ahead of the first request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the HTTP client cannot be created.
    pub fn open(&self) -> Result<(), Error> {
        self.protocol.open().map_err(Error::Connection)
    }

    /// Releases the HTTP session if the stove created it.
    pub fn close(&self) {
        self.protocol.close();
    }

    /// Opens the session and returns a guard that closes it when dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the HTTP client cannot be created.
    pub fn session(&self) -> Result<SessionGuard<'_>, Error> {
        self.open()?;
        Ok(SessionGuard::new(self))
    }
}

impl<P: Protocol> Stove<P> {
    /// Creates a stove on top of a custom transport.
    pub fn with_protocol(protocol: P) -> Self {
        Self {
            protocol,
            info: RwLock::new(None),
        }
    }

    /// Returns the transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Returns the snapshot from the last successful
    /// [`update_info`](Self::update_info).
    ///
    /// `None` before the first update and after any failed one.
    #[must_use]
    pub fn info(&self) -> Option<Info> {
        self.info.read().clone()
    }

    /// Fetches the status document and caches the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API sends an empty or
    /// non-object document. The cached snapshot is cleared in that case.
    pub async fn update_info(&self) -> Result<Info, Error> {
        let result = self.fetch_info().await;

        if let Err(err) = &result {
            tracing::warn!(error = %err, "Status update failed, clearing cached info");
        }
        *self.info.write() = result.as_ref().ok().cloned();

        result
    }

    async fn fetch_info(&self) -> Result<Info, Error> {
        let document = self.protocol.request(STATUS_PATH, Method::Get, None).await?;

        match document {
            Some(document @ Value::Object(_)) => Ok(Info::from_json(&document)),
            Some(other) => Err(ApiError::UnexpectedDocument {
                body: other.to_string(),
            }
            .into()),
            None => Err(ApiError::UnexpectedDocument {
                body: String::new(),
            }
            .into()),
        }
    }

    /// Posts a control command.
    ///
    /// The cached snapshot is not touched; call
    /// [`update_info`](Self::update_info) to observe the effect.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn send_command<C: Command + Sync>(&self, command: &C) -> Result<(), Error> {
        tracing::debug!(command = command.name(), "Sending stove command");
        let payload = command.controller_payload();
        self.protocol
            .request(CONTROL_PATH, Method::Post, Some(&payload))
            .await
            .map(drop)
    }

    // ========== Control ==========

    /// Turns the stove on.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn turn_on(&self) -> Result<(), Error> {
        self.send_command(&PowerCommand::On).await
    }

    /// Turns the stove off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn turn_off(&self) -> Result<(), Error> {
        self.send_command(&PowerCommand::Off).await
    }

    /// Sets the target temperature in °C.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_target_temperature(&self, celsius: f64) -> Result<(), Error> {
        self.send_command(&TargetTemperatureCommand::new(celsius))
            .await
    }

    /// Switches eco mode.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_mode(&self, mode: EcoMode) -> Result<(), Error> {
        self.send_command(&EcoModeCommand(mode)).await
    }
}
