//! Creation panel: prompt input, model choice, one in-flight generation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use logogen::{GeneratedLogo, LogoClient, LogoModel};

use crate::aistudio;
use crate::components::{GenerateButton, ModelSelector, PromptInput};
use crate::download;

/// Build-time API key for the hosted page.
const API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

const GENERIC_FAILURE: &str = "Failed to generate logo. Please try again.";

/// A submission is allowed only when idle and the prompt has content.
/// Whitespace-only prompts are a silent no-op.
fn can_submit(prompt: &str, is_generating: bool) -> bool {
    !is_generating && !prompt.trim().is_empty()
}

fn failure_message(err: &logogen::Error) -> String {
    let text = err.to_string();
    if text.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        text
    }
}

/// The client is rebuilt per attempt so a credential selected through the
/// host dialog since the last attempt takes effect.
async fn generate(prompt: &str, model: LogoModel) -> logogen::Result<GeneratedLogo> {
    let mut builder = LogoClient::builder();
    if let Some(key) = API_KEY {
        builder = builder.api_key(key);
    }
    if aistudio::is_aistudio() {
        builder = builder.credential_host(aistudio::AiStudioHost);
    }
    let client = builder.build()?;
    client.generate(prompt, model).await
}

#[component]
pub fn LogoCreator(#[prop(into)] on_generated: Callback<GeneratedLogo>) -> impl IntoView {
    let prompt = RwSignal::new(String::new());
    let model = RwSignal::new(LogoModel::Flash);
    let is_generating = RwSignal::new(false);
    let current = RwSignal::new(None::<GeneratedLogo>);
    let error = RwSignal::new(None::<String>);

    let on_generate = Callback::new(move |_: ()| {
        let text = prompt.get_untracked();
        if !can_submit(&text, is_generating.get_untracked()) {
            return;
        }
        let chosen = model.get_untracked();

        is_generating.set(true);
        error.set(None);

        spawn_local(async move {
            match generate(&text, chosen).await {
                Ok(logo) => {
                    current.set(Some(logo.clone()));
                    on_generated.run(logo);
                }
                // The previous result stays visible on failure.
                Err(err) => error.set(Some(failure_message(&err))),
            }
            is_generating.set(false);
        });
    });

    let submit_disabled = Signal::derive(move || !can_submit(&prompt.get(), is_generating.get()));

    let download_current = move |_| {
        if let Some(logo) = current.get_untracked() {
            download::save_data_uri(&logo.image_url, &format!("logogenerate-{}.png", logo.id));
        }
    };

    view! {
        <div class="creator-panel">
            <header class="creator-header">
                <h1 class="app-title">"LogoGenerate"</h1>
                <p class="tagline">"Describe your brand, get a professional logo in seconds."</p>
            </header>

            <div class="panel input-panel">
                <PromptInput prompt=prompt disabled=is_generating />
                <ModelSelector model=model disabled=is_generating />

                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! { <div class="error-box">{message}</div> }
                        })
                }}

                <GenerateButton
                    is_generating=is_generating
                    disabled=submit_disabled
                    on_generate=on_generate
                />
            </div>

            {move || {
                current
                    .get()
                    .map(|logo| {
                        view! {
                            <div class="panel result-panel">
                                <div class="result-header">
                                    <h3>"Generated Result"</h3>
                                    <button class="download-button" on:click=download_current>
                                        "Download"
                                    </button>
                                </div>
                                <img
                                    class="result-image"
                                    src=logo.image_url.clone()
                                    alt=logo.prompt.clone()
                                />
                                <p class="result-prompt">"Prompt: " {logo.prompt.clone()}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_submit_rejects_empty_and_whitespace() {
        assert!(!can_submit("", false));
        assert!(!can_submit("   \n\t", false));
        assert!(can_submit("A fox head", false));
    }

    #[test]
    fn test_can_submit_rejects_while_generating() {
        assert!(!can_submit("A fox head", true));
    }

    #[test]
    fn test_failure_message_uses_error_text() {
        let err = logogen::Error::Api {
            status: 500,
            message: "internal".into(),
        };
        assert_eq!(failure_message(&err), "API error: 500 - internal");
    }
}
