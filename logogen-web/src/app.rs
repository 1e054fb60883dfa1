use leptos::prelude::*;
use logogen::GeneratedLogo;

use crate::components::{Gallery, LogoCreator};
use crate::history;

#[component]
pub fn App() -> impl IntoView {
    // Session history, newest first. Lives only for the page lifetime.
    let logos = RwSignal::new(Vec::<GeneratedLogo>::new());

    let on_generated = Callback::new(move |logo: GeneratedLogo| {
        logos.update(|entries| history::add(entries, logo));
    });

    view! {
        <main class="layout">
            <div class="creator-column">
                <LogoCreator on_generated=on_generated />
            </div>
            <Show when=move || !logos.get().is_empty()>
                <Gallery logos=logos />
            </Show>
        </main>
        <footer class="app-footer">
            <p>"Powered by Google Gemini models"</p>
        </footer>
    }
}
