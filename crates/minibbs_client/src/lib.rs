// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # minibbs client
//!
//! Browser-side behaviour of the minibbs bulletin board, compiled to
//! WebAssembly. The server renders every page; this crate only wires up
//! two interactions on top of it:
//!
//! * **Post detail modal**: clicking a `.post-detail-trigger` fetches the
//!   post's detail fragment from `/posts/{id}/detail/ajax/` and shows it in
//!   the Bootstrap modal `#postDetailModal`.
//! * **Likes**: clicking a `.btn-like` posts to `/posts/{id}/like/ajax/`
//!   and renders the returned state on *every* like button of that post,
//!   so the list and the open modal never disagree.
//!
//! ### Loading
//!
//! ```html
//! <meta name="csrf-token" content="{{ csrf_token }}">
//! <script type="module">
//!   import init, { start } from "/static/board/pkg/minibbs_client.js";
//!
//!   await init();
//!   start();
//! </script>
//! ```
//!
//! [`start_with`] accepts an object overriding any field of [`Config`].
//!
//! ### Testing
//!
//! The [`Controller`] is generic over its [`Transport`] and [`Modal`], so
//! browser tests drive it with recording mocks instead of a live server.

use std::mem::ManuallyDrop;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod detail;
mod error;
mod like;

pub mod api;
pub mod config;
pub mod controller;
pub mod dom;
pub mod event;
pub mod modal;
pub mod transport;

pub use api::{LikeState, PostId};
pub use config::Config;
pub use controller::Controller;
pub use error::Error;
pub use modal::{BootstrapModal, Modal};
pub use transport::{HttpTransport, Transport};

/// Start the client with the default [`Config`].
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_with(JsValue::UNDEFINED)
}

/// Start the client, overriding defaults with the fields of `config`.
///
/// Binding happens once the document is parsed. Subsequent calls are
/// ignored.
#[wasm_bindgen]
pub fn start_with(config: JsValue) -> Result<(), JsValue> {
    let config = Config::from_js(&config)?;

    init_console(config.log_level);

    if !claim_start() {
        log::warn!("board client already started");
        return Ok(());
    }

    let document = dom::document()?;

    if document.ready_state() == "loading" {
        let target = document.clone();

        EventListener::once(&target, "DOMContentLoaded", move |_| mount_page(config, document))
            .forget();
    } else {
        mount_page(config, document);
    }

    Ok(())
}

fn mount_page(config: Config, document: Document) {
    let mounted = dom::element_by_id(&document, &config.modal_id)
        .and_then(|element| BootstrapModal::new(&element))
        .and_then(|modal| Controller::mount(config, document, HttpTransport, modal));

    match mounted {
        // The controller stays bound for the lifetime of the page
        Ok(controller) => {
            let _controller = ManuallyDrop::new(controller);
        }
        Err(err) => log::error!("board client not started: {err}"),
    }
}

thread_local! {
    static STARTED: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

fn claim_start() -> bool {
    !STARTED.with(|started| started.replace(true))
}

/// Route panics and log records to the browser console, once per page.
fn init_console(level: log::Level) {
    thread_local! {
        static INIT: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
    }

    if INIT.with(|init| init.replace(true)) {
        return;
    }

    // Panic messages only reach the console on debug builds
    #[cfg(debug_assertions)]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    wasm_logger::init(wasm_logger::Config::new(level));
}
