//! Public landing page with a call to action into the chat.

use leptos::prelude::*;
use leptos_router::components::A;

struct Feature {
    title: &'static str,
    description: &'static str,
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Program discovery",
            description: "Find degree programs that match your background, budget and goals.",
        },
        Feature {
            title: "Application guidance",
            description: "Step-by-step help with requirements, essays and deadlines.",
        },
        Feature {
            title: "Document review",
            description: "Upload transcripts and statements and get instant feedback.",
        },
        Feature {
            title: "Your language",
            description: "Chat in English, Arabic, French, Spanish, Dutch or Chinese.",
        },
    ]
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <nav class="landing__nav">
                <span class="landing__brand">"Aria"</span>
                <A attr:class="landing__nav-link" href="/chat">
                    "Open Chat"
                </A>
            </nav>

            <section class="landing__hero">
                <h1>"Your university application assistant"</h1>
                <p>
                    "Aria answers questions about programs, admissions requirements and "
                    "deadlines, and reviews your documents along the way."
                </p>
                <A attr:class="landing__cta" href="/chat">
                    "Start chatting"
                </A>
            </section>

            <section class="landing__features">
                {features()
                    .into_iter()
                    .map(|f| {
                        view! {
                            <div class="landing__feature">
                                <h3>{f.title}</h3>
                                <p>{f.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <footer class="landing__footer">
                <p>"Aria might provide inaccurate information. Always verify critical details."</p>
            </footer>
        </div>
    }
}
