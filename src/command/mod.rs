// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WiRCU control commands.
//!
//! Every control request carries a `controller` object inside the
//! authenticated [`Envelope`](crate::protocol::Envelope). A command only
//! describes the keys it changes; the envelope adds credentials, the API
//! version and the controller `type`.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Controller payload |
//! |-------------|---------|---------|
//! | [`PowerCommand`] | Turn the stove on or off | `{"command": 2}` |
//! | [`TargetTemperatureCommand`] | Change the setpoint | `{"temperatures": [{"id": 1, "set": 21.5}]}` |
//! | [`EcoModeCommand`] | Toggle eco mode | `{"ecoMode": {"ecoModeEnable": 1}}` |
//!
//! # Examples
//!
//! ```
//! use fumis_lib::command::{Command, PowerCommand};
//! use serde_json::json;
//!
//! let cmd = PowerCommand::On;
//! assert_eq!(cmd.name(), "power_on");
//! assert_eq!(
//!     serde_json::Value::Object(cmd.controller_payload()),
//!     json!({"command": 2})
//! );
//! ```

mod eco;
mod power;
mod temperature;

pub use eco::EcoModeCommand;
pub use power::PowerCommand;
pub use temperature::TargetTemperatureCommand;

use serde_json::{Map, Value};

/// A control command that can be posted to the WiRCU API.
pub trait Command {
    /// Returns a short name for logging.
    fn name(&self) -> &'static str;

    /// Returns the keys to merge into the envelope's `controller` object.
    fn controller_payload(&self) -> Map<String, Value>;
}
