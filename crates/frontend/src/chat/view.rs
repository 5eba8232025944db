//! Interactive chat page.
//!
//! Composes the conversation store, the inference client, and the upload
//! client. Every store mutation is synchronous; the only suspension points
//! are the two network calls, and every async path ends in a UI state
//! update, never an unhandled error.

use contracts::chat::{Conversation, Message};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::{self, PredictionRequest};
use super::language_select::LanguageSelector;
use super::share_dialog::ShareDialog;
use super::sidebar::Sidebar;
use super::store::ConversationStore;
use super::upload;
use crate::shared::i18n::{supported_languages, translate, use_language};
use crate::shared::storage::{BrowserStorage, ConversationStorage};

fn load_store() -> ConversationStore {
    let storage = ConversationStorage::new(BrowserStorage);
    ConversationStore::from_parts(
        storage.load_conversations(),
        storage.load_active_conversation(),
        storage.load_pinned_conversations(),
    )
}

fn display_name(code: &str) -> String {
    supported_languages()
        .into_iter()
        .find(|l| l.code == code)
        .map(|l| l.name)
        .unwrap_or_else(|| code.to_string())
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let lang = use_language();
    let store = RwSignal::new(load_store());

    let input = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let is_uploading = RwSignal::new(false);
    let selected_file = RwSignal::new_local(None::<web_sys::File>);
    let error = RwSignal::new(None::<String>);
    let storage_warning = RwSignal::new(None::<String>);
    let share_for = RwSignal::new(None::<Conversation>);

    // Persistence helpers; each writes only the keys its mutation touched.
    let persist_all = move || {
        let result = store.with_untracked(|s| {
            let storage = ConversationStorage::new(BrowserStorage);
            storage
                .save_conversations(&s.conversations)
                .and_then(|()| storage.save_active_conversation(s.active_id.as_deref()))
                .and_then(|()| storage.save_pinned_conversations(&s.pinned))
        });
        if let Err(e) = result {
            log::error!("failed to persist conversations: {e}");
            storage_warning.set(Some(translate(
                &lang.language.get_untracked(),
                "historyWarning",
            )));
        }
    };
    let persist_active = move || {
        let result = store.with_untracked(|s| {
            ConversationStorage::new(BrowserStorage)
                .save_active_conversation(s.active_id.as_deref())
        });
        if let Err(e) = result {
            log::error!("failed to persist active conversation: {e}");
        }
    };
    let persist_pinned = move || {
        let result = store.with_untracked(|s| {
            ConversationStorage::new(BrowserStorage).save_pinned_conversations(&s.pinned)
        });
        if let Err(e) = result {
            log::error!("failed to persist pinned set: {e}");
        }
    };

    // Fire-and-forget language priming for a newly created conversation.
    // Failure is swallowed by design; this only warms up the remote session.
    let prime = move |conversation_id: String, code: String| {
        spawn_local(async move {
            if let Err(e) = api::prime_language(&conversation_id, &display_name(&code)).await {
                log::debug!("language priming failed (ignored): {e}");
            }
        });
    };

    let create_conversation = move |code: String| {
        let welcome = translate(&code, "welcomeMessage");
        let Some(id) = store.try_update(|s| s.create_conversation(&code, &welcome)) else {
            return;
        };
        persist_all();
        prime(id, code);
    };

    let on_select_language = Callback::new(move |code: String| {
        lang.set(&code);
        create_conversation(code);
    });

    let on_new_chat = Callback::new(move |()| {
        create_conversation(lang.language.get_untracked());
    });

    let on_select = Callback::new(move |id: String| {
        store.update(|s| {
            if s.get(&id).is_some() {
                s.active_id = Some(id.clone());
            }
        });
        persist_active();
        error.set(None);
    });

    let on_delete = Callback::new(move |id: String| {
        store.update(|s| {
            s.delete_conversation(&id);
        });
        persist_all();
    });

    let on_rename = Callback::new(move |(id, title): (String, String)| {
        let renamed = store
            .try_update(|s| s.rename_conversation(&id, &title))
            .unwrap_or(false);
        if renamed {
            persist_all();
        }
    });

    let on_toggle_pin = Callback::new(move |id: String| {
        store.update(|s| s.toggle_pin(&id));
        persist_pinned();
    });

    let on_delete_all = move |_| {
        store.update(|s| s.delete_all());
        ConversationStorage::new(BrowserStorage).clear_conversation_keys();
        create_conversation(lang.language.get_untracked());
    };

    let on_delete_message = move |message_id: String| {
        let Some(conv_id) = store.with_untracked(|s| s.active_id.clone()) else {
            return;
        };
        store.update(|s| {
            s.delete_message(&conv_id, &message_id);
        });
        persist_all();
    };

    let do_send = move || {
        if is_loading.get_untracked() || is_uploading.get_untracked() {
            return;
        }
        let text = input.get_untracked().trim().to_string();
        let file = selected_file.get_untracked();
        if text.is_empty() && file.is_none() {
            return;
        }
        input.set(String::new());
        error.set(None);

        spawn_local(async move {
            let attachment = match file {
                Some(file) => {
                    is_uploading.set(true);
                    let result = upload::upload_file(&file).await;
                    is_uploading.set(false);
                    selected_file.set(None);
                    match result {
                        Ok(att) => Some(att),
                        Err(e) => {
                            log::error!("file upload failed: {e}");
                            error.set(Some(translate(
                                &lang.language.get_untracked(),
                                "fileUploadError",
                            )));
                            return;
                        }
                    }
                }
                None => None,
            };

            let code = lang.language.get_untracked();
            let welcome = translate(&code, "welcomeMessage");
            let display = if text.is_empty() {
                match &attachment {
                    Some(att) => format!("Sent a file: {}", att.file_name),
                    None => return,
                }
            } else {
                text.clone()
            };
            let question = api::build_question(&text, attachment.as_ref());

            let Some(conv_id) = store.try_update(|s| {
                let id = s.ensure_active_conversation(&code, &welcome);
                s.append_message(&id, true, &display, attachment);
                id
            }) else {
                return;
            };
            persist_all();

            is_loading.set(true);
            let response = api::query(&PredictionRequest::for_session(question, &conv_id)).await;
            store.update(|s| {
                s.append_message(&conv_id, false, &response.text, None);
            });
            persist_all();
            is_loading.set(false);
        });
    };

    let on_regenerate = move |_| {
        if is_loading.get_untracked() || is_uploading.get_untracked() {
            return;
        }
        let last = store.with_untracked(|s| {
            s.active_id.clone().and_then(|id| {
                s.last_user_message()
                    .map(|m| (id, m.content.clone(), m.file_attachment.clone()))
            })
        });
        let Some((conv_id, content, attachment)) = last else {
            return;
        };
        spawn_local(async move {
            is_loading.set(true);
            let question = api::build_question(&content, attachment.as_ref());
            let response = api::query(&PredictionRequest::for_session(question, &conv_id)).await;
            store.update(|s| {
                s.append_message(&conv_id, false, &response.text, None);
            });
            persist_all();
            is_loading.set(false);
        });
    };

    let copy_message = move |content: String| {
        spawn_local(async move {
            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                let _ =
                    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&content)).await;
            }
        });
    };

    let has_active = Memo::new(move |_| store.with(|s| s.active().is_some()));
    let active_title = move || {
        store.with(|s| s.active().map(|c| c.title.clone()).unwrap_or_default())
    };
    let messages = move || {
        store.with(|s| {
            s.active()
                .map(|c| c.messages.clone())
                .unwrap_or_default()
        })
    };
    let can_send = move || {
        !is_loading.get()
            && !is_uploading.get()
            && (!input.get().trim().is_empty()
                || selected_file.with(|f| f.is_some()))
    };

    view! {
        <Show
            when=move || has_active.get()
            fallback=move || view! { <LanguageSelector on_select=on_select_language /> }
        >
            <div class="chat-layout">
                <Sidebar
                    store=store
                    on_new_chat=on_new_chat
                    on_select=on_select
                    on_delete=on_delete
                    on_rename=on_rename
                    on_toggle_pin=on_toggle_pin
                />

                <main class="chat">
                    <header class="chat__header">
                        <h1 class="chat__title">{active_title}</h1>
                        <div class="chat__header-actions">
                            <select
                                class="chat__language"
                                title=move || lang.t("changeLanguage")
                                on:change=move |ev| lang.set(&event_target_value(&ev))
                            >
                                {supported_languages()
                                    .into_iter()
                                    .map(|l| {
                                        let code = l.code.clone();
                                        view! {
                                            <option
                                                value=l.code.clone()
                                                selected=move || lang.language.get() == code
                                            >
                                                {l.native_name.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                            <button
                                class="chat__action"
                                title=move || lang.t("regenerate")
                                on:click=on_regenerate
                            >
                                {move || lang.t("regenerate")}
                            </button>
                            <button
                                class="chat__action"
                                title=move || lang.t("share")
                                on:click=move |_| {
                                    share_for.set(store.with_untracked(|s| s.active().cloned()));
                                }
                            >
                                {move || lang.t("share")}
                            </button>
                            <button
                                class="chat__action chat__action--danger"
                                title=move || lang.t("delete")
                                on:click=on_delete_all
                            >
                                {move || lang.t("delete")}
                            </button>
                        </div>
                    </header>

                    <Show when=move || storage_warning.get().is_some()>
                        <div class="chat__banner chat__banner--warning">
                            {move || storage_warning.get().unwrap_or_default()}
                        </div>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <div class="chat__banner chat__banner--error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="chat__messages">
                        <For each=messages key=|m| m.id.clone() children=move |m: Message| {
                            let row_class = if m.is_user {
                                "message message--user"
                            } else {
                                "message message--assistant"
                            };
                            let copy_content = m.content.clone();
                            let delete_id = m.id.clone();
                            let attachment = m.file_attachment.clone();
                            view! {
                                <div class=row_class>
                                    <p>{m.content.clone()}</p>
                                    {attachment
                                        .map(|att| {
                                            let size = upload::format_file_size(att.file_size);
                                            view! {
                                                <a
                                                    class="message__attachment"
                                                    href=att.file_url.clone()
                                                    target="_blank"
                                                >
                                                    {att.file_name.clone()}
                                                    " (" {size} ")"
                                                </a>
                                            }
                                        })}
                                    <div class="message__actions">
                                        <button
                                            class="message__action"
                                            title=move || lang.t("copy")
                                            on:click=move |_| copy_message(copy_content.clone())
                                        >
                                            {move || lang.t("copy")}
                                        </button>
                                        <button
                                            class="message__action"
                                            title=move || lang.t("delete")
                                            on:click=move |_| on_delete_message(delete_id.clone())
                                        >
                                            {move || lang.t("delete")}
                                        </button>
                                    </div>
                                </div>
                            }
                        } />
                        <Show when=move || is_loading.get()>
                            <div class="message message--assistant message--pending">
                                {move || lang.t("generatingAnswer")}
                            </div>
                        </Show>
                    </div>

                    <div class="chat__composer">
                        <Show when=move || selected_file.with(|f| f.is_some())>
                            <div class="chat__file-chip">
                                <span>
                                    {move || {
                                        selected_file
                                            .with(|f| f.as_ref().map(|f| f.name()))
                                            .unwrap_or_default()
                                    }}
                                </span>
                                <Show when=move || is_uploading.get()>
                                    <span class="chat__file-status">
                                        {move || lang.t("uploading")}
                                    </span>
                                </Show>
                                <button
                                    class="chat__file-remove"
                                    on:click=move |_| selected_file.set(None)
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                        </Show>
                        <div class="chat__input-row">
                            <label class="chat__attach" title=move || lang.t("attachFile")>
                                "\u{1F4CE}"
                                <input
                                    type="file"
                                    class="chat__file-input"
                                    disabled=move || is_uploading.get()
                                    on:change=move |ev| {
                                        let target =
                                            event_target::<web_sys::HtmlInputElement>(&ev);
                                        selected_file
                                            .set(target.files().and_then(|list| list.get(0)));
                                    }
                                />
                            </label>
                            <input
                                class="chat__input"
                                placeholder=move || lang.t("askMeAnything")
                                prop:value=move || input.get()
                                on:input=move |ev| input.set(event_target_value(&ev))
                                on:keydown=move |ev| {
                                    if ev.key() == "Enter" && !ev.shift_key() {
                                        ev.prevent_default();
                                        do_send();
                                    }
                                }
                            />
                            <button
                                class="chat__send"
                                disabled=move || !can_send()
                                on:click=move |_| do_send()
                            >
                                {move || lang.t("send")}
                            </button>
                        </div>
                        <p class="chat__disclaimer">
                            {move || lang.t("disclaimer")} " " {move || lang.t("verifyDetails")}
                        </p>
                    </div>
                </main>

                {move || {
                    share_for
                        .get()
                        .map(|conversation| {
                            view! {
                                <ShareDialog
                                    conversation=conversation
                                    on_close=Callback::new(move |()| share_for.set(None))
                                />
                            }
                        })
                }}
            </div>
        </Show>
    }
}
