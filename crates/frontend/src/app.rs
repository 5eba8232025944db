use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::chat::shared_page::SharedConversationPage;
use crate::chat::ChatPage;
use crate::files::FilesPage;
use crate::landing::LandingPage;
use crate::shared::i18n::LanguageContext;

#[component]
pub fn App() -> impl IntoView {
    // Provide the language context to the whole app.
    provide_context(LanguageContext::load());

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/chat") view=ChatPage />
                <Route path=path!("/chat/shared") view=SharedConversationPage />
                <Route path=path!("/files") view=FilesPage />
            </Routes>
        </Router>
    }
}
