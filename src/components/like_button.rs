use crate::components::hooks::use_like::{use_like, UseLike};
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Spinner};
use icons::Heart;
use leptos::prelude::*;

pub(crate) const LIKE_LABEL: &str = "I want this book";

/// Like control bound to its own component instance, so buttons rendered at any time are live.
///
/// Renders the same `.like-btn[data-id]` markup the server templates use.
#[component]
pub fn LikeButton(
    #[prop(into)] book_id: String,
    /// Interest count of the enclosing post; overwritten with the server's value.
    count: RwSignal<String>,
) -> impl IntoView {
    let like = use_like(book_id.clone(), count);
    view! { <LikeButtonView like=like book_id=book_id /> }
}

/// Markup for a like control whose state lives in `like`.
#[component]
pub(crate) fn LikeButtonView(like: UseLike, book_id: String) -> impl IntoView {
    let disabled = move || !like.state.get().accepts_clicks();

    view! {
        <Button
            variant=ButtonVariant::Like
            size=ButtonSize::Sm
            class="like-btn"
            attr:data-id=book_id
            attr:disabled=disabled
            on:click=move |ev: web_sys::MouseEvent| like.on_click.run(ev)
        >
            <Show when=move || (like.pending.get() > 0) fallback=|| view! { <Heart /> }>
                <Spinner />
            </Show>
            {move || like.forbidden_label.get().unwrap_or_else(|| LIKE_LABEL.to_string())}
        </Button>
    }
}
