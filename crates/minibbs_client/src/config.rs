// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Page conventions the controller binds to.
//!
//! Defaults match the board's server templates. A page may override any of
//! them by passing an object to [`start_with`](crate::start_with):
//!
//! ```js
//! import init, { start_with } from "./minibbs_client.js";
//!
//! await init();
//! start_with({ likedIcon: "fas fa-heart", logLevel: "debug" });
//! ```

use gloo_utils::format::JsValueSerdeExt;
use log::Level;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::Error;

/// Placeholder substituted with the post id in endpoint templates.
pub const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Id of the element the modal widget is constructed on.
    pub modal_id: String,
    /// Id of the element receiving the detail fragment.
    pub content_id: String,
    /// `name` of the `<meta>` tag carrying the CSRF token.
    pub csrf_meta_name: String,
    pub detail_trigger_class: String,
    pub like_button_class: String,
    pub detail_endpoint: String,
    pub like_endpoint: String,
    pub liked_icon: String,
    pub unliked_icon: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            modal_id: "postDetailModal".into(),
            content_id: "postDetailContent".into(),
            csrf_meta_name: "csrf-token".into(),
            detail_trigger_class: "post-detail-trigger".into(),
            like_button_class: "btn-like".into(),
            detail_endpoint: "/posts/{id}/detail/ajax/".into(),
            like_endpoint: "/posts/{id}/like/ajax/".into(),
            liked_icon: "fas fa-check".into(),
            unliked_icon: "fas fa-thumbs-up".into(),
            log_level: Level::Info,
        }
    }
}

impl Config {
    /// Build a config from a JavaScript object, falling back to defaults for
    /// every missing key. `undefined` and `null` yield the defaults.
    pub fn from_js(value: &JsValue) -> Result<Self, Error> {
        if value.is_undefined() || value.is_null() {
            return Ok(Config::default());
        }

        let config: Config = value
            .into_serde()
            .map_err(|err| Error::Config(err.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Config =
            serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (key, template) in [
            ("detailEndpoint", &self.detail_endpoint),
            ("likeEndpoint", &self.like_endpoint),
        ] {
            if !template.contains(ID_PLACEHOLDER) {
                return Err(Error::Config(format!(
                    "`{key}` must contain `{ID_PLACEHOLDER}`, got `{template}`"
                )));
            }
        }

        for (key, class) in [
            ("detailTriggerClass", &self.detail_trigger_class),
            ("likeButtonClass", &self.like_button_class),
        ] {
            if !is_plain_identifier(class) {
                return Err(Error::Config(format!(
                    "`{key}` must be a single class name, got `{class}`"
                )));
            }
        }

        if !is_plain_identifier(&self.csrf_meta_name) {
            return Err(Error::Config(format!(
                "`csrfMetaName` must be a plain name, got `{}`",
                self.csrf_meta_name
            )));
        }

        Ok(())
    }

    /// Selector matching every detail trigger on the page.
    pub fn detail_trigger_selector(&self) -> String {
        format!(".{}", self.detail_trigger_class)
    }

    /// Selector matching every like button on the page.
    pub fn like_button_selector(&self) -> String {
        format!(".{}", self.like_button_class)
    }

    pub fn csrf_meta_selector(&self) -> String {
        format!("meta[name=\"{}\"]", self.csrf_meta_name)
    }

    pub fn icon_class(&self, liked: bool) -> &str {
        if liked {
            &self.liked_icon
        } else {
            &self.unliked_icon
        }
    }
}

/// Letters, digits, `-` and `_`, not starting with a digit. Such names can
/// be spliced into a selector without escaping.
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '-' || first == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_board_templates() {
        let config = Config::default();

        assert_eq!(config.detail_trigger_selector(), ".post-detail-trigger");
        assert_eq!(config.like_button_selector(), ".btn-like");
        assert_eq!(config.csrf_meta_selector(), "meta[name=\"csrf-token\"]");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = Config::from_json(r#"{ "likedIcon": "fas fa-heart", "logLevel": "debug" }"#)
            .unwrap();

        assert_eq!(config.liked_icon, "fas fa-heart");
        assert_eq!(config.unliked_icon, "fas fa-thumbs-up");
        assert_eq!(config.log_level, Level::Debug);
        assert_eq!(config.modal_id, "postDetailModal");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = Config::from_json(r#"{ "theme": "dark" }"#).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn endpoint_without_placeholder_is_rejected() {
        let err = Config::from_json(r#"{ "likeEndpoint": "/like/" }"#).unwrap_err();

        assert!(matches!(err, Error::Config(ref msg) if msg.contains("likeEndpoint")));
    }

    #[test]
    fn class_with_whitespace_is_rejected() {
        let err = Config::from_json(r#"{ "likeButtonClass": "btn like" }"#).unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn class_with_selector_syntax_is_rejected() {
        for class in ["btn.like", "btn-like]", "#like", "a>b", "1like", ""] {
            let json = format!(r#"{{ "likeButtonClass": "{class}" }}"#);

            assert!(Config::from_json(&json).is_err(), "accepted `{class}`");
        }
    }

    #[test]
    fn meta_name_with_quote_is_rejected() {
        let err = Config::from_json(r#"{ "csrfMetaName": "csrf\"token" }"#).unwrap_err();

        assert!(matches!(err, Error::Config(ref msg) if msg.contains("csrfMetaName")));
    }

    #[test]
    fn custom_class_names_are_accepted() {
        let config =
            Config::from_json(r#"{ "likeButtonClass": "js_like-btn2", "csrfMetaName": "_csrf" }"#)
                .unwrap();

        assert_eq!(config.like_button_selector(), ".js_like-btn2");
        assert_eq!(config.csrf_meta_selector(), "meta[name=\"_csrf\"]");
    }

    #[test]
    fn icon_class_follows_liked_flag() {
        let config = Config::default();

        assert_eq!(config.icon_class(true), "fas fa-check");
        assert_eq!(config.icon_class(false), "fas fa-thumbs-up");
    }
}
