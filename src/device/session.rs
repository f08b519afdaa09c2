// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scoped session handling.

use std::ops::Deref;

use crate::device::Stove;
use crate::protocol::HttpClient;

/// An open session on a [`Stove`], closed when dropped.
///
/// Obtained from [`Stove::session`]. Dereferences to the stove, so all
/// operations are available on the guard. Dropping it releases the HTTP
/// session if the stove created it; a client supplied with
/// [`StoveBuilder::with_client`](crate::StoveBuilder::with_client) is left
/// untouched.
///
/// # Examples
///
/// ```no_run
/// use fumis_lib::Stove;
///
/// # async fn example() -> fumis_lib::Result<()> {
/// let stove = Stove::new("AABBCCDDEEFF", "1234");
/// {
///     let session = stove.session()?;
///     let info = session.update_info().await?;
///     println!("{} at {} °C", info.status(), info.temperature());
/// }
/// // Session released here.
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
#[must_use = "the session is closed as soon as the guard is dropped"]
pub struct SessionGuard<'a> {
    stove: &'a Stove<HttpClient>,
}

impl<'a> SessionGuard<'a> {
    pub(crate) fn new(stove: &'a Stove<HttpClient>) -> Self {
        Self { stove }
    }
}

impl Deref for SessionGuard<'_> {
    type Target = Stove<HttpClient>;

    fn deref(&self) -> &Self::Target {
        self.stove
    }
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.stove.close();
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Client;

    use crate::device::Stove;

    #[test]
    fn guard_releases_owned_session() {
        let stove = Stove::new("AABBCCDDEEFF", "1234");
        {
            let session = stove.session().unwrap();
            assert!(session.protocol().owns_session());
        }
        assert!(!stove.protocol().has_session());
    }

    #[test]
    fn guard_keeps_shared_session() {
        let stove = Stove::builder("AABBCCDDEEFF", "1234")
            .with_client(Client::new())
            .build();
        {
            let _session = stove.session().unwrap();
        }
        assert!(stove.protocol().has_session());
    }
}
