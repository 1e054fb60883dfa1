use leptos::prelude::*;
use logogen::LogoModel;

#[component]
pub fn ModelSelector(
    model: RwSignal<LogoModel>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let make_handler = move |m: LogoModel| move |_| model.set(m);
    let class_for = move |m: LogoModel| {
        move || {
            if model.get() == m {
                "model-button model-button-active"
            } else {
                "model-button"
            }
        }
    };

    view! {
        <div class="model-toggle">
            <label>"Model"</label>
            <button
                type="button"
                class=class_for(LogoModel::Flash)
                on:click=make_handler(LogoModel::Flash)
                disabled=move || disabled.get()
            >
                {LogoModel::Flash.display_name()}
            </button>
            <button
                type="button"
                class=class_for(LogoModel::Pro)
                on:click=make_handler(LogoModel::Pro)
                disabled=move || disabled.get()
            >
                {LogoModel::Pro.display_name()}
            </button>
        </div>
    }
}
