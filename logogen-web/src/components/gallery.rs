//! Session history panel, newest first.

use leptos::prelude::*;
use logogen::{GeneratedLogo, LogoModel};

use crate::download;

const PROMPT_PREVIEW_CHARS: usize = 80;

fn truncate_prompt(prompt: &str) -> String {
    let preview: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
    if prompt.chars().count() > PROMPT_PREVIEW_CHARS {
        format!("{preview}...")
    } else {
        preview
    }
}

#[component]
pub fn Gallery(#[prop(into)] logos: Signal<Vec<GeneratedLogo>>) -> impl IntoView {
    view! {
        <aside class="history-panel">
            <h2 class="history-title">"History"</h2>
            <div class="history-list">
                {move || {
                    logos
                        .get()
                        .into_iter()
                        .map(|logo| view! { <GalleryItem logo=logo /> })
                        .collect_view()
                }}
            </div>
        </aside>
    }
}

#[component]
fn GalleryItem(logo: GeneratedLogo) -> impl IntoView {
    let tier = LogoModel::tier_label(&logo.model);
    let time = logo.time_of_day();
    let preview = truncate_prompt(&logo.prompt);

    let entry_download = logo.clone();
    let on_download = move |_| {
        download::save_data_uri(
            &entry_download.image_url,
            &format!("logo-{}.png", entry_download.id),
        );
    };

    view! {
        <div class="history-entry">
            <img class="history-image" src=logo.image_url.clone() alt=logo.prompt.clone() />
            <p class="history-prompt" title=logo.prompt.clone()>{preview}</p>
            <div class="history-meta">
                <span class="history-tier">{tier}</span>
                <span class="history-time">{time}</span>
                <button class="history-download" on:click=on_download title="Download">
                    "Download"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_prompt_untouched() {
        assert_eq!(truncate_prompt("A fox head"), "A fox head");
    }

    #[test]
    fn test_truncate_long_prompt_adds_ellipsis() {
        let long = "x".repeat(200);
        let preview = truncate_prompt(&long);
        assert_eq!(preview.chars().count(), PROMPT_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let long = "ü".repeat(81);
        let preview = truncate_prompt(&long);
        assert_eq!(preview.chars().count(), PROMPT_PREVIEW_CHARS + 3);
    }
}
