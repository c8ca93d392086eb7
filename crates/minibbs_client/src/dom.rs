// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lookups on the server-rendered page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::api::PostId;
use crate::Error;

pub const POST_ID_ATTR: &str = "data-post-id";

pub fn document() -> Result<Document, Error> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::MissingElement("document".into()))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, Error> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(format!("#{id}")))
}

/// Every element matching `selector`, in document order. An invalid
/// selector yields nothing.
pub fn query_all(document: &Document, selector: &str) -> impl Iterator<Item = Element> {
    let list = document.query_selector_all(selector).ok();
    let len = list.as_ref().map_or(0, |list| list.length());

    (0..len).filter_map(move |idx| list.as_ref()?.item(idx)?.dyn_into::<Element>().ok())
}

pub fn post_id(element: &Element) -> Result<PostId, Error> {
    element
        .get_attribute(POST_ID_ATTR)
        .and_then(PostId::new)
        .ok_or(Error::MissingPostId)
}

/// `content` of the first `<meta>` matching `selector`.
pub fn meta_content(document: &Document, selector: &str) -> Option<String> {
    document
        .query_selector(selector)
        .ok()??
        .get_attribute("content")
}
