//! Synology Photos web API
//!
//! Every call is a blocking GET with query parameters. Operations are split
//! by concern (session, query, fetcher) but share one `PhotoApi` handle.
//! None of them return errors to the caller: failures are logged and turned
//! into neutral values.

pub(crate) mod client;
mod fetcher;
mod query;
pub(crate) mod session;
pub(crate) mod types;

use crate::config::ApiSettings;

pub(crate) use client::{Transport, UreqTransport};
pub(crate) use session::SessionToken;

pub(crate) struct PhotoApi<'a, T: Transport> {
    settings: &'a ApiSettings,
    transport: &'a T,
}

impl<'a, T: Transport> PhotoApi<'a, T> {
    pub(crate) fn new(settings: &'a ApiSettings, transport: &'a T) -> Self {
        Self {
            settings,
            transport,
        }
    }
}
