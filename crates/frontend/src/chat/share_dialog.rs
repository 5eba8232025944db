//! Share dialog: encodes the conversation into a link and copies it.

use contracts::chat::share::{encode_snapshot, ConversationSnapshot};
use contracts::chat::Conversation;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::i18n::use_language;

/// Build the shareable URL for a conversation, or an error display string
/// when the payload cannot be encoded.
pub fn share_url(conversation: &Conversation) -> String {
    let snapshot = ConversationSnapshot::from(conversation);
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    match encode_snapshot(&snapshot) {
        Ok(payload) => format!("{origin}/chat/shared?data={}", urlencoding::encode(&payload)),
        Err(e) => {
            log::error!("share link encoding failed: {e}");
            "Error generating link. Conversation may be too large to share.".to_string()
        }
    }
}

#[component]
pub fn ShareDialog(conversation: Conversation, on_close: Callback<()>) -> impl IntoView {
    let lang = use_language();
    let copied = RwSignal::new(false);
    let url = share_url(&conversation);
    let url_for_copy = url.clone();

    let copy_link = move |_| {
        let url = url_for_copy.clone();
        spawn_local(async move {
            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                let _ = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&url)).await;
            }
        });
        copied.set(true);
        // Revert the label after a short confirmation window
        spawn_local(async move {
            TimeoutFuture::new(2_000).await;
            copied.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>{move || lang.t("shareConversation")}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "\u{2715}"
                    </button>
                </div>
                <p class="dialog__hint">{move || lang.t("publicAccess")}</p>
                <div class="dialog__link-row">
                    <input class="dialog__link" readonly prop:value=url.clone() />
                    <button class="dialog__copy" on:click=copy_link>
                        {move || {
                            if copied.get() { lang.t("linkCopied") } else { lang.t("copyLink") }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
