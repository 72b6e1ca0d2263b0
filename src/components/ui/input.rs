use crate::models::PasswordMode;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::event_target_value;
use tw_merge::tw_merge;

/// Text input whose `type` follows a [`PasswordMode`] signal.
#[component]
pub fn Input(
    #[prop(into, optional)] class: String,

    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] autofocus: bool,

    /// Drives `type="password"` / `type="text"`.
    #[prop(into)]
    mode: Signal<PasswordMode>,

    // Two-way binding, wired by hand rather than via `bind:value`.
    #[prop(into)]
    bind_value: RwSignal<String>,

    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm",
        "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
        class
    );

    let on_input = move |ev: web_sys::Event| bind_value.set(event_target_value(&ev));

    view! {
        <input
            data-name="Input"
            type=move || mode.get().as_input_type()
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            required=required
            autofocus=autofocus
            prop:value=move || bind_value.get()
            on:input=on_input
            node_ref=node_ref
        />
    }
    .into_any()
}
