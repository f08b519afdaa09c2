// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authenticated request body for control calls.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::protocol::Credentials;

/// API version sent with every envelope.
pub const API_VERSION: &str = "1";

/// Value of the `type` field of the `unit` and `controller` objects.
const DEVICE_TYPE: u8 = 0;

/// The JSON wrapper posted to the control endpoint.
///
/// ```json
/// {
///   "unit": {"id": "AABBCCDDEEFF", "type": 0, "pin": "1234"},
///   "apiVersion": "1",
///   "controller": {"command": 2, "type": 0}
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<'a> {
    unit: Unit<'a>,
    api_version: &'static str,
    controller: Map<String, Value>,
}

#[derive(Serialize)]
struct Unit<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: u8,
    pin: &'a str,
}

impl std::fmt::Debug for Unit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unit")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<'a> Envelope<'a> {
    /// Wraps a controller payload with the unit credentials.
    ///
    /// The payload's keys are kept as given and `type: 0` is added.
    #[must_use]
    pub fn new(credentials: &'a Credentials, payload: &Map<String, Value>) -> Self {
        let mut controller = payload.clone();
        controller.insert("type".to_string(), DEVICE_TYPE.into());

        Self {
            unit: Unit {
                id: credentials.mac(),
                kind: DEVICE_TYPE,
                pin: credentials.password(),
            },
            api_version: API_VERSION,
            controller,
        }
    }

    /// Returns the merged controller object.
    #[must_use]
    pub fn controller(&self) -> &Map<String, Value> {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, PowerCommand, TargetTemperatureCommand};
    use serde_json::json;

    fn credentials() -> Credentials {
        Credentials::new("AABBCCDDEEFF", "1234")
    }

    #[test]
    fn turn_on_envelope() {
        let credentials = credentials();
        let envelope = Envelope::new(&credentials, &PowerCommand::On.controller_payload());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "unit": {"id": "AABBCCDDEEFF", "type": 0, "pin": "1234"},
                "apiVersion": "1",
                "controller": {"command": 2, "type": 0}
            })
        );
    }

    #[test]
    fn temperature_envelope_keeps_payload() {
        let credentials = credentials();
        let envelope = Envelope::new(
            &credentials,
            &TargetTemperatureCommand::new(23.4).controller_payload(),
        );
        assert_eq!(
            Value::Object(envelope.controller().clone()),
            json!({"temperatures": [{"set": 23.4, "id": 1}], "type": 0})
        );
    }

    #[test]
    fn empty_payload_still_has_type() {
        let credentials = credentials();
        let envelope = Envelope::new(&credentials, &Map::new());
        assert_eq!(Value::Object(envelope.controller().clone()), json!({"type": 0}));
    }

    #[test]
    fn debug_hides_pin() {
        let credentials = credentials();
        let envelope = Envelope::new(&credentials, &Map::new());
        assert!(!format!("{envelope:?}").contains("1234"));
    }
}
