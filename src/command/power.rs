// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control commands.

use serde_json::{Map, Value};

use crate::command::Command;
use crate::types::PowerState;

/// Command to turn the stove on or off.
///
/// # Examples
///
/// ```
/// use fumis_lib::command::{Command, PowerCommand};
/// use fumis_lib::types::PowerState;
///
/// let cmd = PowerCommand::from(PowerState::Off);
/// assert_eq!(cmd, PowerCommand::Off);
/// assert_eq!(cmd.controller_payload()["command"], 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommand {
    /// Turn the stove off.
    Off,
    /// Turn the stove on.
    On,
}

impl PowerCommand {
    /// Returns the requested power state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        match self {
            Self::Off => PowerState::Off,
            Self::On => PowerState::On,
        }
    }
}

impl From<PowerState> for PowerCommand {
    fn from(state: PowerState) -> Self {
        match state {
            PowerState::Off => Self::Off,
            PowerState::On => Self::On,
        }
    }
}

impl Command for PowerCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Off => "power_off",
            Self::On => "power_on",
        }
    }

    fn controller_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("command".to_string(), self.state().code().into());
        payload
    }
}
