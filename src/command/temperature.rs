// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Setpoint command.

use serde_json::{Map, Value, json};

use crate::command::Command;
use crate::types::STOVE_ID;

/// Command to change the stove's target temperature.
///
/// The setpoint is sent as the `set` value of the stove's own entry in
/// `controller.temperatures`.
///
/// # Examples
///
/// ```
/// use fumis_lib::command::{Command, TargetTemperatureCommand};
/// use serde_json::json;
///
/// let cmd = TargetTemperatureCommand::new(23.4);
/// assert_eq!(
///     cmd.controller_payload()["temperatures"],
///     json!([{"id": 1, "set": 23.4}])
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTemperatureCommand {
    celsius: f64,
}

impl TargetTemperatureCommand {
    /// Creates a command setting the target to `celsius` degrees.
    #[must_use]
    pub const fn new(celsius: f64) -> Self {
        Self { celsius }
    }

    /// Returns the requested setpoint.
    #[must_use]
    pub const fn celsius(&self) -> f64 {
        self.celsius
    }
}

impl Command for TargetTemperatureCommand {
    fn name(&self) -> &'static str {
        "set_target_temperature"
    }

    fn controller_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert(
            "temperatures".to_string(),
            json!([{ "id": STOVE_ID, "set": self.celsius }]),
        );
        payload
    }
}
