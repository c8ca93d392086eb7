// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error type shared by every fallible operation in the crate.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: gloo_net::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no element matches `{0}`")]
    MissingElement(String),

    #[error("element has no `data-post-id` attribute")]
    MissingPostId,

    #[error("modal widget failed: {0}")]
    Modal(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Wrap a thrown JavaScript value coming out of the modal widget.
    pub(crate) fn modal(js: JsValue) -> Self {
        Error::Modal(js.as_string().unwrap_or_else(|| format!("{js:?}")))
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}
