use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn PromptInput(prompt: RwSignal<String>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let textarea: web_sys::HtmlTextAreaElement = target.unchecked_into();
        prompt.set(textarea.value());
    };

    view! {
        <div class="prompt-section">
            <label for="logo-prompt">"Describe your logo idea"</label>
            <textarea
                id="logo-prompt"
                rows="4"
                placeholder="E.g., A minimalist geometric fox head logo for a tech startup, orange and dark grey gradients, clean lines, white background..."
                prop:value=move || prompt.get()
                on:input=on_input
                disabled=move || disabled.get()
            />
        </div>
    }
}
