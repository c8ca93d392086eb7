// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Like toggling, shared by the post list and the detail modal.

use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::api::{self, ApiRequest, LikeState, PostId};
use crate::controller::Controller;
use crate::dom;
use crate::event::ClickEvent;
use crate::modal::Modal;
use crate::transport::Transport;
use crate::Error;

impl<T: Transport, M: Modal> Controller<T, M> {
    /// Bind the like handler to every like button on the page. Safe to call
    /// repeatedly: a button never ends up with more than one binding.
    pub fn bind_like_buttons(&self) -> usize {
        let mut bound = 0;

        for button in dom::query_all(&self.document, &self.config.like_button_selector()) {
            self.like_listener.rebind(&button);
            bound += 1;
        }

        bound
    }

    pub(crate) fn on_like_click(&self, event: ClickEvent) {
        event.prevent_default();

        let id = match event
            .current_element()
            .ok_or(Error::MissingPostId)
            .and_then(|el| dom::post_id(&el))
        {
            Ok(id) => id,
            Err(err) => {
                log::error!("cannot toggle like: {err}");
                return;
            }
        };

        let Some(controller) = self.this.upgrade() else {
            return;
        };

        spawn_local(async move {
            if let Err(err) = controller.toggle_like(&id).await {
                log::error!("failed to toggle like of post {id}: {err}");
            }
        });
    }

    /// Toggle the like on `id` and render the server's answer.
    pub async fn toggle_like(&self, id: &PostId) -> Result<LikeState, Error> {
        let request = ApiRequest::like(&self.config, id, self.csrf_token.as_deref());
        let body = self.transport.send(request).await?;
        let state: LikeState = api::decode(&body)?;

        self.update_like_display(id, state.liked, state.like_count);

        Ok(state)
    }

    /// Render a like state on every button of post `id`, in the list and in
    /// the modal alike. Returns the number of buttons updated.
    pub fn update_like_display(&self, id: &PostId, liked: bool, like_count: u64) -> usize {
        let icon_class = self.config.icon_class(liked);
        let mut buffer = itoa::Buffer::new();
        let count = buffer.format(like_count);

        let mut updated = 0;

        for button in dom::query_all(&self.document, &self.config.like_button_selector()) {
            if button.get_attribute(dom::POST_ID_ATTR).as_deref() != Some(id.as_str()) {
                continue;
            }

            match render(&button, icon_class, count) {
                Ok(()) => updated += 1,
                Err(err) => log::warn!("skipping like button of post {id}: {err}"),
            }
        }

        log::debug!("post {id}: liked={liked} count={like_count} on {updated} buttons");

        updated
    }
}

fn render(button: &Element, icon_class: &str, count: &str) -> Result<(), Error> {
    let icon = button
        .query_selector("i")
        .ok()
        .flatten()
        .ok_or_else(|| Error::MissingElement("i".into()))?;
    let counter = button
        .next_element_sibling()
        .ok_or_else(|| Error::MissingElement("like count".into()))?;

    icon.set_class_name(icon_class);
    counter.set_text_content(Some(count));

    Ok(())
}
