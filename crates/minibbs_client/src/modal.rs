// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The dialog the post detail is shown in.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::Error;

pub trait Modal: 'static {
    fn show(&self) -> Result<(), Error>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    type JsModal;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Modal")]
    fn new(element: &Element) -> Result<JsModal, JsValue>;

    #[wasm_bindgen(catch, method, js_class = "Modal")]
    fn show(this: &JsModal) -> Result<(), JsValue>;
}

/// Bootstrap 5 `bootstrap.Modal`, which must be loaded on the page before
/// the controller mounts.
pub struct BootstrapModal {
    js: JsModal,
}

impl BootstrapModal {
    pub fn new(element: &Element) -> Result<Self, Error> {
        let js = JsModal::new(element).map_err(Error::modal)?;

        Ok(BootstrapModal { js })
    }
}

impl Modal for BootstrapModal {
    fn show(&self) -> Result<(), Error> {
        self.js.show().map_err(Error::modal)
    }
}
