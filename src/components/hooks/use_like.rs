use crate::api::LikeClient;
use crate::config::EnvConfig;
use crate::like::{apply_effect, effect_for, LikeEffect, LikeTarget};
use crate::models::LikeButtonState;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Reactive handles behind a single like button.
#[derive(Clone, Copy)]
pub struct UseLike {
    pub state: RwSignal<LikeButtonState>,
    /// Interest count of the enclosing post.
    pub count: RwSignal<String>,
    /// Label set by a lockout; `None` while the button is usable.
    pub forbidden_label: RwSignal<Option<String>>,
    /// Requests started and not yet settled. Clicks are not debounced.
    pub pending: RwSignal<u32>,
    pub on_click: Callback<web_sys::MouseEvent>,
}

impl UseLike {
    /// Apply a finished request's effect to the signals.
    pub(crate) fn settle(&self, effect: &LikeEffect, config: &EnvConfig) {
        settle(effect, config, self.state, self.count, self.forbidden_label);
    }
}

struct SignalLikeTarget {
    count: RwSignal<String>,
    forbidden_label: RwSignal<Option<String>>,
}

impl LikeTarget for SignalLikeTarget {
    fn set_count(&self, text: &str) {
        self.count.set(text.to_string());
    }

    fn lock_out(&self, label: &str) {
        self.forbidden_label.set(Some(label.to_string()));
    }

    fn notify(&self, message: &str) {
        let _ = window().alert_with_message(message);
    }
}

fn settle(
    effect: &LikeEffect,
    config: &EnvConfig,
    state: RwSignal<LikeButtonState>,
    count: RwSignal<String>,
    forbidden_label: RwSignal<Option<String>>,
) {
    let target = SignalLikeTarget {
        count,
        forbidden_label,
    };
    apply_effect(effect, &target, config);
    state.update(|s| *s = s.after(effect));
}

/// Per-button like controller. `count` is the enclosing post's interest count.
pub fn use_like(book_id: String, count: RwSignal<String>) -> UseLike {
    let config = use_context::<EnvConfig>().unwrap_or_else(EnvConfig::new);

    let state = RwSignal::new(LikeButtonState::Enabled);
    let forbidden_label: RwSignal<Option<String>> = RwSignal::new(None);
    let pending: RwSignal<u32> = RwSignal::new(0);

    let on_click = Callback::new(move |ev: web_sys::MouseEvent| {
        // The post card navigates on click; the like must not.
        ev.stop_propagation();

        if !state.get_untracked().accepts_clicks() {
            return;
        }

        let book_id = book_id.clone();
        let config = config.clone();
        pending.update(|n| *n += 1);

        spawn_local(async move {
            let client = LikeClient::from_config(&config);
            let result = client.like_book(&book_id).await;
            let effect = effect_for(result, config.notify_on_network_error);

            settle(&effect, &config, state, count, forbidden_label);
            pending.update(|n| *n = n.saturating_sub(1));
        });
    });

    UseLike {
        state,
        count,
        forbidden_label,
        pending,
        on_click,
    }
}
