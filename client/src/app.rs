//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::Toaster;
use crate::pages::home::HomePage;
use crate::state::{assistant::AssistantState, connectivity::ConnectivityState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the per-card state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(ConnectivityState::default()));
    provide_context(RwSignal::new(AssistantState::default()));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/ipv6insight.css"/>
        <Title text="IPv6Insight"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
