// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lenient accessors over the status document.
//!
//! Every accessor takes an optional parent object so lookups can be chained
//! through missing sections without branching. Scalars are coerced: the API
//! has been seen sending numbers as strings.

use serde_json::{Map, Value};

use crate::types::STOVE_ID;

pub(crate) type Object = Map<String, Value>;

/// Returns the object stored under `key`.
pub(crate) fn section<'a>(parent: Option<&'a Object>, key: &str) -> Option<&'a Object> {
    parent?.get(key)?.as_object()
}

/// Returns the array stored under `key`, empty if absent.
pub(crate) fn list<'a>(parent: Option<&'a Object>, key: &str) -> &'a [Value] {
    parent
        .and_then(|parent| parent.get(key))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Reads an integer, truncating floats and parsing numeric strings.
pub(crate) fn integer(parent: Option<&Object>, key: &str) -> Option<i64> {
    parent?.get(key).and_then(as_integer)
}

/// Reads a non-negative counter, 0 when absent or negative.
pub(crate) fn counter(parent: Option<&Object>, key: &str) -> u64 {
    integer(parent, key)
        .and_then(|value| u64::try_from(value).ok())
        .unwrap_or(0)
}

/// Reads a float, parsing numeric strings.
pub(crate) fn float(parent: Option<&Object>, key: &str) -> Option<f64> {
    match parent?.get(key)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Reads a string, rendering numbers.
pub(crate) fn text(parent: Option<&Object>, key: &str) -> Option<String> {
    match parent?.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Picks the stove's own record out of a per-zone sequence.
///
/// Single-zone controllers may omit `id`; such an entry is used when no
/// entry carries the stove id.
pub(crate) fn stove_entry(entries: &[Value]) -> Option<&Object> {
    let objects = || entries.iter().filter_map(Value::as_object);

    objects()
        .find(|entry| entry.get("id").and_then(as_integer) == Some(STOVE_ID))
        .or_else(|| objects().find(|entry| !entry.contains_key("id")))
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(truncate)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(truncate))
        }
        Value::Bool(flag) => Some(i64::from(*flag)),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: &Value) -> Option<&Object> {
        value.as_object()
    }

    #[test]
    fn missing_sections_chain() {
        let doc = json!({"controller": {"statistic": {"uptime": 5}}});
        let root = object(&doc);
        assert!(section(section(root, "unit"), "anything").is_none());
        assert_eq!(counter(section(section(root, "controller"), "statistic"), "uptime"), 5);
    }

    #[test]
    fn section_requires_object() {
        let doc = json!({"unit": "AABBCCDDEEFF"});
        assert!(section(object(&doc), "unit").is_none());
    }

    #[test]
    fn list_defaults_to_empty() {
        let doc = json!({"temperatures": {"id": 1}});
        assert!(list(object(&doc), "temperatures").is_empty());
        assert!(list(None, "temperatures").is_empty());
    }

    #[test]
    fn integer_coercion() {
        let doc = json!({"a": 7, "b": 7.9, "c": "12", "d": "-3.5", "e": true, "f": null, "g": "x"});
        let root = object(&doc);
        assert_eq!(integer(root, "a"), Some(7));
        assert_eq!(integer(root, "b"), Some(7));
        assert_eq!(integer(root, "c"), Some(12));
        assert_eq!(integer(root, "d"), Some(-3));
        assert_eq!(integer(root, "e"), Some(1));
        assert_eq!(integer(root, "f"), None);
        assert_eq!(integer(root, "g"), None);
        assert_eq!(integer(root, "missing"), None);
    }

    #[test]
    fn counter_clamps_negative() {
        let doc = json!({"misfires": -4, "uptime": "58184580"});
        assert_eq!(counter(object(&doc), "misfires"), 0);
        assert_eq!(counter(object(&doc), "uptime"), 58_184_580);
    }

    #[test]
    fn float_coercion() {
        let doc = json!({"a": 19.9, "b": 21, "c": "0.42", "d": "NaN", "e": [1]});
        let root = object(&doc);
        assert_eq!(float(root, "a"), Some(19.9));
        assert_eq!(float(root, "b"), Some(21.0));
        assert_eq!(float(root, "c"), Some(0.42));
        assert_eq!(float(root, "d"), None);
        assert_eq!(float(root, "e"), None);
    }

    #[test]
    fn text_coercion() {
        let doc = json!({"a": "1.7.0", "b": 2, "c": {"x": 1}});
        let root = object(&doc);
        assert_eq!(text(root, "a").as_deref(), Some("1.7.0"));
        assert_eq!(text(root, "b").as_deref(), Some("2"));
        assert_eq!(text(root, "c"), None);
    }

    #[test]
    fn stove_entry_by_id() {
        let entries = json!([
            {"id": 2, "actual": 17.0},
            {"id": "1", "actual": 19.9},
            {"id": 1, "actual": 30.0}
        ]);
        let entry = stove_entry(entries.as_array().unwrap()).unwrap();
        assert_eq!(float(Some(entry), "actual"), Some(19.9));
    }

    #[test]
    fn stove_entry_without_ids() {
        let entries = json!([{"actual": 19.9, "set": 21.8}]);
        let entry = stove_entry(entries.as_array().unwrap()).unwrap();
        assert_eq!(float(Some(entry), "set"), Some(21.8));
    }

    #[test]
    fn stove_entry_no_match() {
        let entries = json!([{"id": 2, "actual": 17.0}, "junk"]);
        assert!(stove_entry(entries.as_array().unwrap()).is_none());
        assert!(stove_entry(&[]).is_none());
    }
}
