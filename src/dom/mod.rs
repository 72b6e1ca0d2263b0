//! Progressive enhancement of server-rendered pages.
//!
//! The page template owns the markup; this module only depends on a small contract:
//! `.like-btn[data-id]` buttons, each inside a `.book-post` that holds an `.interest-count`.

use crate::api::LikeClient;
use crate::config::EnvConfig;
use crate::like::{apply_effect, effect_for, LikeTarget};
use leptos::logging::{log, warn};
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(crate) const LIKE_BUTTON_SELECTOR: &str = ".like-btn";
pub(crate) const BOOK_POST_SELECTOR: &str = ".book-post";
pub(crate) const INTEREST_COUNT_SELECTOR: &str = ".interest-count";
pub(crate) const BOOK_ID_ATTR: &str = "data-id";

/// A like button living in server-rendered markup.
pub(crate) struct DomLikeTarget {
    button: web_sys::HtmlElement,
}

impl DomLikeTarget {
    pub fn new(button: web_sys::HtmlElement) -> Self {
        Self { button }
    }

    fn count_display(&self) -> Option<web_sys::HtmlElement> {
        let post = self.button.closest(BOOK_POST_SELECTOR).ok().flatten()?;
        post.query_selector(INTEREST_COUNT_SELECTOR)
            .ok()
            .flatten()?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }
}

impl LikeTarget for DomLikeTarget {
    fn set_count(&self, text: &str) {
        match self.count_display() {
            Some(display) => display.set_inner_text(text),
            None => warn!(
                "like button has no enclosing {} with {}",
                BOOK_POST_SELECTOR, INTEREST_COUNT_SELECTOR
            ),
        }
    }

    fn lock_out(&self, label: &str) {
        match self.button.dyn_ref::<web_sys::HtmlButtonElement>() {
            Some(button) => button.set_disabled(true),
            None => {
                let _ = self.button.set_attribute("disabled", "");
            }
        }
        self.button.set_inner_text(label);
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

fn is_disabled(el: &web_sys::HtmlElement) -> bool {
    match el.dyn_ref::<web_sys::HtmlButtonElement>() {
        Some(button) => button.disabled(),
        None => el.has_attribute("disabled"),
    }
}

/// Click handler shared by every bound like button.
pub(crate) fn handle_like(event: &web_sys::Event, config: &EnvConfig) {
    // The button sits inside a clickable post; keep the post's own handler out of it.
    event.stop_propagation();

    let Some(button) = event
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    if is_disabled(&button) {
        return;
    }

    let Some(book_id) = button
        .get_attribute(BOOK_ID_ATTR)
        .filter(|id| !id.trim().is_empty())
    else {
        warn!("like button without {BOOK_ID_ATTR}; ignoring click");
        return;
    };

    let config = config.clone();
    spawn_local(async move {
        let client = LikeClient::from_config(&config);
        let result = client.like_book(&book_id).await;
        let effect = effect_for(result, config.notify_on_network_error);
        apply_effect(&effect, &DomLikeTarget::new(button), &config);
    });
}

fn bind_all(buttons: web_sys::NodeList, config: EnvConfig) -> usize {
    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        handle_like(&ev, &config);
    });

    let mut bound = 0;
    for i in 0..buttons.length() {
        let Some(node) = buttons.item(i) else {
            continue;
        };
        if node
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            bound += 1;
        }
    }

    // Listeners live as long as the page.
    if bound > 0 {
        handler.forget();
    }
    bound
}

/// Bind the like handler to every `.like-btn` currently in the document.
///
/// Buttons inserted afterwards are not bound.
pub fn bind_like_buttons(document: &web_sys::Document, config: &EnvConfig) -> usize {
    let Ok(buttons) = document.query_selector_all(LIKE_BUTTON_SELECTOR) else {
        return 0;
    };
    let bound = bind_all(buttons, config.clone());
    log!("bound {bound} like button(s)");
    bound
}

/// Same as [`bind_like_buttons`], limited to the subtree under `root`.
pub fn bind_like_buttons_in(root: &web_sys::Element, config: &EnvConfig) -> usize {
    let Ok(buttons) = root.query_selector_all(LIKE_BUTTON_SELECTOR) else {
        return 0;
    };
    bind_all(buttons, config.clone())
}

/// Run `f` once the document has been parsed.
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        f();
        return;
    }

    let cb = Closure::once_into_js(f);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
}
