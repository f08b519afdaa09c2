// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power and eco mode values sent to the controller.

use std::fmt;

/// Requested power state of the stove.
///
/// # Examples
///
/// ```
/// use fumis_lib::types::PowerState;
///
/// assert_eq!(PowerState::On.code(), 2);
/// assert_eq!(PowerState::Off.code(), 1);
/// assert_eq!(PowerState::from(true), PowerState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// Stove is off.
    Off,
    /// Stove is on.
    On,
}

impl PowerState {
    /// Returns the `controller.command` code for this state.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Off => 1,
            Self::On => 2,
        }
    }

    /// Returns the label reported for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

/// Eco mode switch.
///
/// # Examples
///
/// ```
/// use fumis_lib::types::EcoMode;
///
/// assert_eq!(EcoMode::On.code(), 1);
/// assert_eq!(EcoMode::from_code(0), Some(EcoMode::Off));
/// assert_eq!(EcoMode::from_code(7), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EcoMode {
    /// Normal operation.
    #[default]
    Off,
    /// Eco operation.
    On,
}

impl EcoMode {
    /// Returns the `ecoModeEnable` code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    /// Parses an `ecoModeEnable` code.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Off),
            1 => Some(Self::On),
            _ => None,
        }
    }
}

impl From<bool> for EcoMode {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl fmt::Display for EcoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::On => "on",
        })
    }
}
