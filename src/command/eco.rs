// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Eco mode command.

use serde_json::{Map, Value, json};

use crate::command::Command;
use crate::types::EcoMode;

/// Command to switch eco mode on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcoModeCommand(pub EcoMode);

impl From<EcoMode> for EcoModeCommand {
    fn from(mode: EcoMode) -> Self {
        Self(mode)
    }
}

impl Command for EcoModeCommand {
    fn name(&self) -> &'static str {
        "set_eco_mode"
    }

    fn controller_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert(
            "ecoMode".to_string(),
            json!({ "ecoModeEnable": self.0.code() }),
        );
        payload
    }
}
