//! Conversation list sidebar: pinned group, recent group with a 5-entry
//! overflow, search, and per-conversation actions.

use contracts::chat::Conversation;
use leptos::prelude::*;

use super::store::{ConversationStore, RECENT_LIMIT};
use crate::shared::i18n::use_language;

#[component]
pub fn Sidebar(
    store: RwSignal<ConversationStore>,
    on_new_chat: Callback<()>,
    on_select: Callback<String>,
    on_delete: Callback<String>,
    on_rename: Callback<(String, String)>,
    on_toggle_pin: Callback<String>,
) -> impl IntoView {
    let lang = use_language();
    let search = RwSignal::new(String::new());
    let show_all = RwSignal::new(false);
    // id of the conversation currently being renamed, if any
    let renaming = RwSignal::new(None::<String>);
    let rename_text = RwSignal::new(String::new());

    let pinned = Memo::new(move |_| store.with(|s| s.partition(&search.get()).0));
    let unpinned = Memo::new(move |_| store.with(|s| s.partition(&search.get()).1));
    let visible_unpinned = Memo::new(move |_| {
        let list = unpinned.get();
        if show_all.get() {
            list
        } else {
            list.into_iter().take(RECENT_LIMIT).collect()
        }
    });
    let has_overflow = Memo::new(move |_| unpinned.get().len() > RECENT_LIMIT);
    let nothing_found = Memo::new(move |_| {
        !search.get().trim().is_empty() && pinned.get().is_empty() && unpinned.get().is_empty()
    });

    let item = move |conv: Conversation| {
        let id = conv.id.clone();
        let is_active =
            Memo::new({
                let id = id.clone();
                move |_| store.with(|s| s.active_id.as_deref() == Some(id.as_str()))
            });
        let is_pinned = Memo::new({
            let id = id.clone();
            move |_| store.with(|s| s.is_pinned(&id))
        });
        let is_renaming = Memo::new({
            let id = id.clone();
            move |_| renaming.get().as_deref() == Some(id.as_str())
        });

        let select_id = id.clone();
        let delete_id = id.clone();
        let pin_id = id.clone();
        let start_rename_id = id.clone();
        let start_rename_title = conv.title.clone();
        let commit_id = id.clone();

        let commit_rename = move |_| {
            on_rename.run((commit_id.clone(), rename_text.get()));
            renaming.set(None);
        };

        view! {
            <div class=move || {
                if is_active.get() {
                    "sidebar__item sidebar__item--active"
                } else {
                    "sidebar__item"
                }
            }>
                <Show
                    when=move || is_renaming.get()
                    fallback=move || {
                        let title = conv.title.clone();
                        let select_id = select_id.clone();
                        view! {
                            <button
                                class="sidebar__title"
                                on:click=move |_| on_select.run(select_id.clone())
                            >
                                {title}
                            </button>
                        }
                    }
                >
                    <input
                        class="sidebar__rename-input"
                        prop:value=move || rename_text.get()
                        on:input=move |ev| rename_text.set(event_target_value(&ev))
                        on:change=commit_rename.clone()
                    />
                </Show>
                <div class="sidebar__actions">
                    <button
                        class="sidebar__action"
                        title=move || {
                            if is_pinned.get() { lang.t("unpin") } else { lang.t("pin") }
                        }
                        on:click=move |_| on_toggle_pin.run(pin_id.clone())
                    >
                        {move || if is_pinned.get() { "\u{2605}" } else { "\u{2606}" }}
                    </button>
                    <button
                        class="sidebar__action"
                        title=move || lang.t("rename")
                        on:click=move |_| {
                            rename_text.set(start_rename_title.clone());
                            renaming.set(Some(start_rename_id.clone()));
                        }
                    >
                        "\u{270E}"
                    </button>
                    <button
                        class="sidebar__action sidebar__action--danger"
                        title=move || lang.t("delete")
                        on:click=move |_| on_delete.run(delete_id.clone())
                    >
                        "\u{2715}"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__header">
                <h1>{move || lang.t("chats")}</h1>
                <input
                    class="sidebar__search"
                    placeholder=move || lang.t("search")
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            <button class="sidebar__new-chat" on:click=move |_| on_new_chat.run(())>
                "+ " {move || lang.t("newChat")}
            </button>

            <Show when=move || !pinned.get().is_empty()>
                <div class="sidebar__group-label">{move || lang.t("pinned")}</div>
                <For each=move || pinned.get() key=|c| c.id.clone() children=item />
            </Show>

            <div class="sidebar__group-label">{move || lang.t("recentConversations")}</div>
            <For each=move || visible_unpinned.get() key=|c| c.id.clone() children=item />

            <Show when=move || has_overflow.get()>
                <button
                    class="sidebar__show-all"
                    on:click=move |_| show_all.update(|v| *v = !*v)
                >
                    {move || {
                        if show_all.get() { lang.t("showLess") } else { lang.t("showAll") }
                    }}
                </button>
            </Show>

            <Show when=move || nothing_found.get()>
                <p class="sidebar__empty">{move || lang.t("noSearchResults")}</p>
            </Show>
        </aside>
    }
}
