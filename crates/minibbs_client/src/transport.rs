// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Network seam between the controller and the board server.

use gloo_net::http::Request;

use crate::api::{ApiRequest, Method};
use crate::Error;

/// Sends an [`ApiRequest`] and resolves to the response body.
///
/// Implementations must treat non-success statuses as errors.
#[allow(async_fn_in_trait)]
pub trait Transport: 'static {
    async fn send(&self, request: ApiRequest) -> Result<String, Error>;
}

/// `fetch`-backed transport. Requests use same-origin credentials so the
/// session cookie travels with them.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, Error> {
        let ApiRequest { method, url, headers } = request;

        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        let builder = headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value));

        log::debug!("{method:?} {url}");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(source) => return Err(Error::Network { url, source }),
        };

        if !response.ok() {
            return Err(Error::Status {
                url,
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| Error::Network { url, source })
    }
}
