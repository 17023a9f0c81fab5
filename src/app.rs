//! Root application component and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no URL routing: the active section lives in `UiState` and the
//! main area is chosen by `SessionStore::screen`, which folds in whether the
//! persisted session has been read and whether it holds an identity. Models
//! shared across sections are provided here as `RwSignal`s. Section pages own
//! their view state, so it starts fresh on every visit and after logout.
//!
//! The persisted session is read in an effect after mount. The server render
//! and the first client render therefore agree on an unloaded session.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{
    auth_modal::AuthModal, auth_prompt::AuthPrompt, footer::Footer, header::Header, notice_stack::NoticeStack,
};
use crate::config::ClientConfig;
use crate::net::Backends;
use crate::pages::{
    assistant::AssistantPage, dashboard::DashboardPage, landing::LandingPage, library::LibraryPage,
    workspace::WorkspacePage,
};
use crate::state::auth_flow::AuthFlow;
use crate::state::notice::NoticeState;
use crate::state::router::Screen;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {e}");
        ClientConfig::default()
    });
    log::info!("starting with {:?} credential policy", config.credential_policy);

    let session = RwSignal::new(SessionStore::new(BrowserStorage, config.session_key.clone()));
    let ui = RwSignal::new(UiState::default());

    provide_context(Backends::simulated(&config));
    provide_context(config);
    provide_context(session);
    provide_context(ui);
    provide_context(RwSignal::new(AuthFlow::default()));
    provide_context(RwSignal::new(NoticeState::default()));

    Effect::new(move || {
        session.update(|store| {
            store.load();
        });
    });

    let screen = Memo::new(move |_| ui.with(|ui| session.with(|store| store.screen(&ui.router))));

    view! {
        <Stylesheet id="leptos" href="/pkg/codecraft-ui.css"/>
        <Title text="CodeCraft Academy"/>

        <div class="app">
            <Header/>
            <main class="app__main">
                {move || match screen.get() {
                    Screen::Landing => view! { <LandingPage/> }.into_any(),
                    Screen::Dashboard => view! { <DashboardPage/> }.into_any(),
                    Screen::Workspace => view! { <WorkspacePage/> }.into_any(),
                    Screen::Assistant => view! { <AssistantPage/> }.into_any(),
                    Screen::Library => view! { <LibraryPage/> }.into_any(),
                    Screen::AuthPrompt(section) => view! { <AuthPrompt section=section/> }.into_any(),
                    Screen::Restoring => view! { <p class="app__loading">"Loading..."</p> }.into_any(),
                }}
            </main>
            <Footer/>
            <AuthModal/>
            <NoticeStack/>
        </div>
    }
}
