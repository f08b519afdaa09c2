// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `fumis_lib` - A Rust library to control Fumis pellet stoves.
//!
//! This library talks to the Fumis WiRCU cloud API: it reads the stove
//! status and sends control commands on behalf of a WiRCU unit identified by
//! its MAC address and PIN.
//!
//! # Supported Features
//!
//! - **Status**: temperatures, operating status, Wi-Fi signal, counters,
//!   fuel level, power and eco mode, as an immutable [`Info`] snapshot
//! - **Power control**: turn the stove on and off
//! - **Setpoint**: change the target temperature
//! - **Eco mode**: switch eco mode on and off
//!
//! # Quick Start
//!
//! ```no_run
//! use fumis_lib::Stove;
//!
//! #[tokio::main]
//! async fn main() -> fumis_lib::Result<()> {
//!     let stove = Stove::new("AABBCCDDEEFF", "1234");
//!
//!     let info = stove.update_info().await?;
//!     println!("{} is {} at {} °C", info.unit_id(), info.status(), info.temperature());
//!
//!     stove.set_target_temperature(23.0).await?;
//!     stove.close();
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`Result`]. [`Error::Connection`] means the
//! request did not complete (including timeouts), [`Error::Api`] means the
//! API answered with an error status, a non-JSON content type or an
//! unusable body. After a failed [`Stove::update_info`] the cached snapshot
//! is cleared.

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{Command, EcoModeCommand, PowerCommand, TargetTemperatureCommand};
pub use device::{SessionGuard, Stove, StoveBuilder};
pub use error::{ApiError, ConnectionError, Error, Result};
pub use protocol::{HttpClient, HttpConfig, Method, Protocol};
pub use response::Info;
pub use types::{EcoMode, PowerState};
