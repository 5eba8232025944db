//! Full-screen language selection, shown when no conversation exists yet.

use leptos::prelude::*;

use crate::shared::i18n::{supported_languages, use_language};

#[component]
pub fn LanguageSelector(
    /// Called with the chosen language code.
    on_select: Callback<String>,
) -> impl IntoView {
    let lang = use_language();
    let languages = supported_languages();

    view! {
        <div class="language-select">
            <div class="language-select__intro">
                <h1>{move || lang.t("welcomeToAria")}</h1>
                <p>{move || lang.t("welcomeDescription")}</p>
            </div>
            <div class="language-select__grid">
                {languages
                    .into_iter()
                    .map(|language| {
                        let code = language.code.clone();
                        view! {
                            <button
                                class="language-select__option"
                                on:click=move |_| on_select.run(code.clone())
                            >
                                <span class="language-select__name">{language.name.clone()}</span>
                                <span class="language-select__native">
                                    {language.native_name.clone()}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="language-select__hint">{move || lang.t("languageDescription")}</p>
        </div>
    }
}
