// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric codes used by the WiRCU API and their human-readable labels.
//!
//! The controller reports its operating status, the last power command and
//! the eco mode flag as integers. The tables below translate them; any code
//! not listed maps to [`UNKNOWN`].

/// Identifier of the stove's own entry in the `temperatures` and `fuels`
/// sequences.
pub const STOVE_ID: i64 = 1;

/// Label used for absent or unrecognized codes.
pub const UNKNOWN: &str = "unknown";

/// Code reported when a status, state or eco field is missing.
pub const UNKNOWN_CODE: i64 = -1;

/// `controller.status` codes.
pub static STATUS_LABELS: &[(i64, &str)] = &[
    (0, "off"),
    (1, "cold_start_off"),
    (2, "wood_burning_off"),
    (10, "pre_heating"),
    (20, "ignition"),
    (21, "ignition"),
    (30, "combustion"),
    (40, "eco"),
    (50, "cooling"),
    (110, "hybrid_init"),
    (120, "hybrid_start"),
    (130, "wood_start"),
    (140, "cold_start"),
    (150, "wood_combustion"),
];

/// `controller.command` codes.
pub static STATE_LABELS: &[(i64, &str)] = &[(1, "off"), (2, "on")];

/// `controller.ecoMode.ecoModeEnable` codes.
pub static ECO_LABELS: &[(i64, &str)] = &[(0, "off"), (1, "on")];

/// Looks up `code` in `table`, falling back to [`UNKNOWN`].
#[must_use]
pub fn label(table: &[(i64, &'static str)], code: i64) -> &'static str {
    table
        .iter()
        .find_map(|&(known, label)| (known == code).then_some(label))
        .unwrap_or(UNKNOWN)
}

/// Translates a `controller.status` code.
///
/// # Examples
///
/// ```
/// use fumis_lib::types::status_label;
///
/// assert_eq!(status_label(0), "off");
/// assert_eq!(status_label(30), "combustion");
/// assert_eq!(status_label(-1), "unknown");
/// ```
#[must_use]
pub fn status_label(code: i64) -> &'static str {
    label(STATUS_LABELS, code)
}

/// Translates a `controller.command` code.
#[must_use]
pub fn state_label(code: i64) -> &'static str {
    label(STATE_LABELS, code)
}

/// Translates an `ecoModeEnable` code.
#[must_use]
pub fn eco_label(code: i64) -> &'static str {
    label(ECO_LABELS, code)
}
