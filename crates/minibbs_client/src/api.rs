// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Board endpoints and their response bodies.

use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::{Config, ID_PLACEHOLDER};
use crate::Error;

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Opaque post identifier, as found in `data-post-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    /// Returns `None` for an empty id.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();

        if id.is_empty() {
            None
        } else {
            Some(PostId(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `GET /posts/{id}/detail/ajax/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DetailFragment {
    pub html: String,
}

/// Body of `POST /posts/{id}/like/ajax/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LikeState {
    pub liked: bool,
    pub like_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request as handed to a [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn detail(config: &Config, id: &PostId) -> Self {
        ApiRequest {
            method: Method::Get,
            url: endpoint(&config.detail_endpoint, id),
            headers: Vec::new(),
        }
    }

    /// The like toggle carries no body; the CSRF header is omitted when the
    /// page provided no token.
    pub fn like(config: &Config, id: &PostId, csrf_token: Option<&str>) -> Self {
        let mut headers = Vec::with_capacity(2);

        if let Some(token) = csrf_token {
            headers.push((CSRF_HEADER, token.to_owned()));
        }
        headers.push(("Content-Type", "application/json".to_owned()));

        ApiRequest {
            method: Method::Post,
            url: endpoint(&config.like_endpoint, id),
            headers,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub fn endpoint(template: &str, id: &PostId) -> String {
    template.replace(ID_PLACEHOLDER, id.as_str())
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    Ok(serde_json::from_str(body)?)
}
