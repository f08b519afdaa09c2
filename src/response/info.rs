// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stove status snapshot.

use serde::Serialize;
use serde_json::Value;

use crate::response::fields::{counter, float, integer, list, section, stove_entry, text};
use crate::types::{
    DEFAULT_RSSI, UNKNOWN_CODE, eco_label, signal_strength, state_label, status_label,
};

const UNKNOWN_TEXT: &str = "Unknown";

/// Snapshot of a WiRCU unit and its stove, built from `GET /v1/status`.
///
/// An `Info` is only produced by [`Info::from_json`]; it has no setters.
/// Every field has a default so partial documents still map:
///
/// | Field | Default |
/// |-------|---------|
/// | identity strings, `ip` | `"Unknown"` |
/// | `rssi` | `-100` (signal strength 0) |
/// | `status_id`, `state_id` | `-1`, labelled `"unknown"` |
/// | temperatures, counters, fuel, power | `0` |
/// | `timers` | empty |
///
/// # Examples
///
/// ```
/// use fumis_lib::Info;
/// use serde_json::json;
///
/// let info = Info::from_json(&json!({
///     "unit": {"id": "AABBCCDDEEFF", "rssi": -60},
///     "controller": {"status": 30, "command": 2}
/// }));
///
/// assert_eq!(info.unit_id(), "AABBCCDDEEFF");
/// assert_eq!(info.signal_strength(), 80);
/// assert_eq!(info.status(), "combustion");
/// assert_eq!(info.state(), "on");
/// assert_eq!(info.controller_version(), "Unknown");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    unit_id: String,
    unit_version: String,
    controller_version: String,

    ip: String,
    rssi: i64,
    signal_strength: u8,

    state: &'static str,
    state_id: i64,
    status: &'static str,
    status_id: i64,

    temperature: f64,
    target_temperature: f64,

    heating_time: u64,
    igniter_starts: u64,
    misfires: u64,
    overheatings: u64,
    uptime: u64,

    fuel_quality: i64,
    fuel_quantity: f64,
    ecomode_type: i64,
    ecomode_state: &'static str,
    timers: Vec<Value>,
    kw: f64,
    actual_power: f64,
}

impl Info {
    /// Maps a status document to a snapshot.
    ///
    /// Never fails: absent or mistyped parts take their defaults, and a root
    /// that is not an object yields the all-default snapshot. Mapping the
    /// same document twice gives equal snapshots.
    #[must_use]
    pub fn from_json(document: &Value) -> Self {
        let root = document.as_object();
        let unit = section(root, "unit");
        let controller = section(root, "controller");

        let statistic = section(controller, "statistic");
        let power = section(controller, "power");
        let eco_mode = section(controller, "ecoMode");
        let temperature = stove_entry(list(controller, "temperatures"));
        let fuel = stove_entry(list(controller, "fuels"));

        let rssi = integer(unit, "rssi").unwrap_or(DEFAULT_RSSI);
        let status_id = integer(controller, "status").unwrap_or(UNKNOWN_CODE);
        let state_id = integer(controller, "command").unwrap_or(UNKNOWN_CODE);
        let ecomode_id = integer(eco_mode, "ecoModeEnable").unwrap_or(UNKNOWN_CODE);

        Self {
            unit_id: text(unit, "id").unwrap_or_else(|| UNKNOWN_TEXT.to_string()),
            unit_version: text(unit, "version").unwrap_or_else(|| UNKNOWN_TEXT.to_string()),
            controller_version: text(controller, "version")
                .unwrap_or_else(|| UNKNOWN_TEXT.to_string()),

            ip: text(unit, "ip").unwrap_or_else(|| UNKNOWN_TEXT.to_string()),
            rssi,
            signal_strength: signal_strength(rssi),

            state: state_label(state_id),
            state_id,
            status: status_label(status_id),
            status_id,

            temperature: float(temperature, "actual").unwrap_or_default(),
            target_temperature: float(temperature, "set").unwrap_or_default(),

            heating_time: counter(statistic, "heatingTime"),
            igniter_starts: counter(statistic, "igniterStarts"),
            misfires: counter(statistic, "misfires"),
            overheatings: counter(statistic, "overheatings"),
            uptime: counter(statistic, "uptime"),

            fuel_quality: integer(fuel, "quality").unwrap_or_default(),
            fuel_quantity: float(fuel, "quantity").unwrap_or_default() * 100.0,
            ecomode_type: integer(eco_mode, "ecoModeSetType").unwrap_or_default(),
            ecomode_state: eco_label(ecomode_id),
            timers: list(controller, "timers").to_vec(),
            kw: float(power, "kw").unwrap_or_default(),
            actual_power: float(power, "actualPower").unwrap_or_default(),
        }
    }

    /// Returns the WiRCU unit identifier (its MAC address).
    #[must_use]
    pub fn unit_id(&self) -> &str {
        &self.unit_id
    }

    /// Returns the WiRCU firmware version.
    #[must_use]
    pub fn unit_version(&self) -> &str {
        &self.unit_version
    }

    /// Returns the stove controller firmware version.
    #[must_use]
    pub fn controller_version(&self) -> &str {
        &self.controller_version
    }

    /// Returns the unit's local IP address.
    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Returns the Wi-Fi RSSI in dBm.
    #[must_use]
    pub fn rssi(&self) -> i64 {
        self.rssi
    }

    /// Returns the Wi-Fi signal quality, 0-100.
    #[must_use]
    pub fn signal_strength(&self) -> u8 {
        self.signal_strength
    }

    /// Returns the label of the last power command (`"on"`, `"off"`).
    #[must_use]
    pub fn state(&self) -> &'static str {
        self.state
    }

    /// Returns the raw power command code.
    #[must_use]
    pub fn state_id(&self) -> i64 {
        self.state_id
    }

    /// Returns the label of the operating status (`"ignition"`, ...).
    #[must_use]
    pub fn status(&self) -> &'static str {
        self.status
    }

    /// Returns the raw operating status code.
    #[must_use]
    pub fn status_id(&self) -> i64 {
        self.status_id
    }

    /// Returns the measured room temperature.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Returns the temperature setpoint.
    #[must_use]
    pub fn target_temperature(&self) -> f64 {
        self.target_temperature
    }

    /// Returns the cumulated heating time.
    #[must_use]
    pub fn heating_time(&self) -> u64 {
        self.heating_time
    }

    /// Returns the number of igniter starts.
    #[must_use]
    pub fn igniter_starts(&self) -> u64 {
        self.igniter_starts
    }

    /// Returns the number of failed ignitions.
    #[must_use]
    pub fn misfires(&self) -> u64 {
        self.misfires
    }

    /// Returns the number of overheating events.
    #[must_use]
    pub fn overheatings(&self) -> u64 {
        self.overheatings
    }

    /// Returns the controller uptime.
    #[must_use]
    pub fn uptime(&self) -> u64 {
        self.uptime
    }

    /// Returns the configured fuel quality.
    #[must_use]
    pub fn fuel_quality(&self) -> i64 {
        self.fuel_quality
    }

    /// Returns the fuel level in percent.
    #[must_use]
    pub fn fuel_quantity(&self) -> f64 {
        self.fuel_quantity
    }

    /// Returns the eco mode type.
    #[must_use]
    pub fn ecomode_type(&self) -> i64 {
        self.ecomode_type
    }

    /// Returns the eco mode label (`"on"`, `"off"`, `"unknown"`).
    #[must_use]
    pub fn ecomode_state(&self) -> &'static str {
        self.ecomode_state
    }

    /// Returns the timer records, as sent by the controller.
    #[must_use]
    pub fn timers(&self) -> &[Value] {
        &self.timers
    }

    /// Returns the nominal power in kW.
    #[must_use]
    pub fn kw(&self) -> f64 {
        self.kw
    }

    /// Returns the current power level.
    #[must_use]
    pub fn actual_power(&self) -> f64 {
        self.actual_power
    }
}

impl From<&Value> for Info {
    fn from(document: &Value) -> Self {
        Self::from_json(document)
    }
}
