use leptos::prelude::*;

#[component]
pub fn GenerateButton(
    #[prop(into)] is_generating: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_generate: Callback<()>,
) -> impl IntoView {
    let label = move || {
        if is_generating.get() {
            "Designing..."
        } else {
            "Generate Logo"
        }
    };

    view! {
        <button
            class="generate-button"
            on:click=move |_| on_generate.run(())
            disabled=move || disabled.get()
        >
            {label}
        </button>
    }
}
