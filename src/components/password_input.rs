use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::{Input, Label};
use crate::models::PasswordMode;
use icons::{Eye, EyeOff};
use leptos::prelude::*;

/// Password field with a show/hide toggle. Starts masked.
#[component]
pub fn PasswordInput(
    #[prop(into)] bind_value: RwSignal<String>,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] label: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = if id.is_empty() {
        use_random_id_for("password")
    } else {
        id
    };
    let mode = RwSignal::new(PasswordMode::Masked);
    let input_id = id.clone();
    let label_view = (!label.is_empty())
        .then(|| view! { <Label html_for=id.clone()>{label}</Label> });

    let toggle = move |_| mode.update(|m| *m = m.toggled());

    view! {
        <div class="flex flex-col gap-2">
            {label_view}
            <div class="relative">
                <Input
                    id=input_id
                    name=name
                    placeholder=placeholder
                    required=required
                    class="pr-10"
                    mode=mode
                    bind_value=bind_value
                />
                // type="button" keeps the toggle from submitting the form.
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 flex w-10 items-center justify-center text-muted-foreground hover:text-foreground"
                    aria-controls=id
                    aria-label=move || if mode.get().is_masked() { "Show password" } else { "Hide password" }
                    on:click=toggle
                >
                    <Show when=move || mode.get().is_masked() fallback=|| view! { <EyeOff /> }>
                        <Eye />
                    </Show>
                </button>
            </div>
        </div>
    }
}
