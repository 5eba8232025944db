//! Read-only view of a shared conversation, decoded from the `?data=`
//! query parameter.

use std::collections::HashMap;

use contracts::chat::share::{decode_snapshot, ConversationSnapshot, ShareRole};
use leptos::prelude::*;
use leptos_router::components::A;

/// Extract and decode the share payload from the current URL. Any missing or
/// malformed stage yields `None`; the page never renders a partial
/// conversation.
fn snapshot_from_url() -> Option<ConversationSnapshot> {
    let search = web_sys::window()?.location().search().ok()?;
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    let data = params.get("data")?;
    match decode_snapshot(data) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            log::error!("rejecting shared-link payload: {e}");
            None
        }
    }
}

#[component]
pub fn SharedConversationPage() -> impl IntoView {
    let snapshot = snapshot_from_url();

    view! {
        {match snapshot {
            Some(snapshot) => {
                view! {
                    <div class="shared-page">
                        <header class="shared-page__header">
                            <A href="/chat">"\u{2190}"</A>
                            <h1>{snapshot.name.clone()}</h1>
                            <span class="shared-page__badge">"Shared conversation from Aria"</span>
                        </header>
                        <div class="shared-page__messages">
                            {snapshot
                                .messages
                                .iter()
                                .map(|msg| {
                                    let class = match msg.role {
                                        ShareRole::User => "message message--user",
                                        ShareRole::Assistant => "message message--assistant",
                                    };
                                    let attachment = msg.file_attachment.clone();
                                    view! {
                                        <div class=class>
                                            <p>{msg.content.clone()}</p>
                                            {attachment
                                                .map(|att| {
                                                    view! {
                                                        <a
                                                            class="message__attachment"
                                                            href=att.file_url.clone()
                                                            target="_blank"
                                                        >
                                                            {att.file_name.clone()}
                                                        </a>
                                                    }
                                                })}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
                    .into_any()
            }
            None => {
                view! {
                    <div class="shared-page shared-page--error">
                        <h1>"Conversation Not Found"</h1>
                        <p>
                            "This link may be invalid or the conversation has been deleted."
                        </p>
                        <A href="/">"Return Home"</A>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
