// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wi-Fi signal strength conversion.

/// RSSI reported when the unit does not send one.
pub const DEFAULT_RSSI: i64 = -100;

/// RSSI (dBm) at or below which the signal is 0%.
const RSSI_FLOOR: i64 = -100;

/// RSSI (dBm) at or above which the signal is 100%.
const RSSI_CEILING: i64 = -50;

/// Converts an RSSI in dBm to a 0-100 signal quality.
///
/// The usable range -100..-50 dBm is mapped linearly, values outside it are
/// clamped.
///
/// # Examples
///
/// ```
/// use fumis_lib::types::signal_strength;
///
/// assert_eq!(signal_strength(-100), 0);
/// assert_eq!(signal_strength(-60), 80);
/// assert_eq!(signal_strength(-48), 100);
/// ```
#[must_use]
pub fn signal_strength(rssi: i64) -> u8 {
    if rssi <= RSSI_FLOOR {
        0
    } else if rssi >= RSSI_CEILING {
        100
    } else {
        // In range, 2 * (rssi + 100) lies within 2..=98.
        u8::try_from(2 * (rssi - RSSI_FLOOR)).unwrap_or(100)
    }
}
