// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mapping of the WiRCU status document.
//!
//! The API returns a deeply nested document whose sections are often
//! partial. [`Info`] flattens it into a typed snapshot with defaults for
//! everything that is missing.

mod fields;
mod info;

pub use info::Info;
