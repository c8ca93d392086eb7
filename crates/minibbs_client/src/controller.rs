// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The page controller: owns every listener the crate installs.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use web_sys::{Document, Element};

use crate::config::Config;
use crate::dom;
use crate::event::SharedListener;
use crate::modal::Modal;
use crate::transport::Transport;
use crate::Error;

/// Binds detail triggers and like buttons on one document.
///
/// Dropping the controller removes all of its listeners from the page.
pub struct Controller<T: Transport, M: Modal> {
    pub(crate) config: Config,
    pub(crate) document: Document,
    pub(crate) content: Element,
    pub(crate) modal: M,
    pub(crate) transport: T,
    pub(crate) csrf_token: Option<String>,
    pub(crate) like_listener: SharedListener,
    pub(crate) detail_listeners: RefCell<Vec<EventListener>>,
    pub(crate) this: Weak<Self>,
}

impl<T: Transport, M: Modal> Controller<T, M> {
    /// Resolve the page elements and read the CSRF token, without binding
    /// anything yet.
    pub fn new(
        config: Config,
        document: Document,
        transport: T,
        modal: M,
    ) -> Result<Rc<Self>, Error> {
        let content = dom::element_by_id(&document, &config.content_id)?;
        let csrf_token = dom::meta_content(&document, &config.csrf_meta_selector());

        if csrf_token.is_none() {
            log::warn!(
                "no `{}` meta tag, like requests will be sent without a CSRF token",
                config.csrf_meta_name
            );
        }

        Ok(Rc::new_cyclic(|this: &Weak<Self>| {
            let weak = this.clone();
            let like_listener = SharedListener::new("click", move |event| {
                if let Some(controller) = weak.upgrade() {
                    controller.on_like_click(event);
                }
            });

            Controller {
                config,
                document,
                content,
                modal,
                transport,
                csrf_token,
                like_listener,
                detail_listeners: RefCell::new(Vec::new()),
                this: this.clone(),
            }
        }))
    }

    /// [`new`](Controller::new), then bind detail triggers and like buttons
    /// present on the page.
    pub fn mount(
        config: Config,
        document: Document,
        transport: T,
        modal: M,
    ) -> Result<Rc<Self>, Error> {
        let controller = Self::new(config, document, transport, modal)?;

        let triggers = controller.bind_post_detail_triggers();
        let buttons = controller.bind_like_buttons();

        log::debug!("bound {triggers} detail triggers and {buttons} like buttons");

        Ok(controller)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn modal(&self) -> &M {
        &self.modal
    }
}

impl<T: Transport, M: Modal> Drop for Controller<T, M> {
    fn drop(&mut self) {
        for button in dom::query_all(&self.document, &self.config.like_button_selector()) {
            self.like_listener.unbind(&button);
        }
    }
}
