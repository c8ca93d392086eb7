// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Post detail modal.

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiRequest, DetailFragment, PostId};
use crate::controller::Controller;
use crate::dom;
use crate::event::ClickEvent;
use crate::modal::Modal;
use crate::transport::Transport;
use crate::Error;

impl<T: Transport, M: Modal> Controller<T, M> {
    /// Attach a click listener to every detail trigger on the page,
    /// replacing listeners from an earlier call. Returns the number of
    /// triggers bound.
    pub fn bind_post_detail_triggers(&self) -> usize {
        let mut listeners = self.detail_listeners.borrow_mut();

        listeners.clear();

        for trigger in dom::query_all(&self.document, &self.config.detail_trigger_selector()) {
            let weak = self.this.clone();

            // Non-passive so `prevent_default` cancels the link navigation
            let listener = EventListener::new_with_options(
                &trigger,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if let Some(controller) = weak.upgrade() {
                        controller.on_detail_click(event.into());
                    }
                },
            );

            listeners.push(listener);
        }

        listeners.len()
    }

    fn on_detail_click(&self, event: ClickEvent) {
        event.prevent_default();

        let id = match event
            .current_element()
            .ok_or(Error::MissingPostId)
            .and_then(|el| dom::post_id(&el))
        {
            Ok(id) => id,
            Err(err) => {
                log::error!("cannot open post detail: {err}");
                return;
            }
        };

        let Some(controller) = self.this.upgrade() else {
            return;
        };

        spawn_local(async move {
            if let Err(err) = controller.load_detail(&id).await {
                log::error!("failed to load detail of post {id}: {err}");
            }
        });
    }

    /// Fetch the detail fragment of `id`, show it in the modal and bind the
    /// like buttons it contains.
    ///
    /// On failure the modal content and visibility are left untouched.
    pub async fn load_detail(&self, id: &PostId) -> Result<(), Error> {
        let body = self.transport.send(ApiRequest::detail(&self.config, id)).await?;
        let fragment: DetailFragment = api::decode(&body)?;

        let previous = self.content.inner_html();

        self.content.set_inner_html(&fragment.html);

        if let Err(err) = self.modal.show() {
            self.content.set_inner_html(&previous);
            return Err(err);
        }

        let buttons = self.bind_like_buttons();

        log::debug!("opened detail of post {id} ({buttons} like buttons on page)");

        Ok(())
    }
}
