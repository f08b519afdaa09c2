// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types and code tables for the WiRCU API.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off command sent to the controller
//! - [`EcoMode`] - Eco mode switch
//! - Code tables translating status, state and eco codes to labels
//! - [`signal_strength`] - RSSI to 0-100 conversion

mod codes;
mod power;
mod signal;

pub use codes::{
    ECO_LABELS, STATE_LABELS, STATUS_LABELS, STOVE_ID, UNKNOWN, UNKNOWN_CODE, eco_label, label,
    state_label, status_label,
};
pub use power::{EcoMode, PowerState};
pub use signal::{DEFAULT_RSSI, signal_strength};
