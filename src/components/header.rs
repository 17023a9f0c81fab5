//! Top navigation bar with section links and the account area.

use leptos::prelude::*;

use super::user_profile_menu::UserProfileMenu;
use crate::state::auth_flow::{AuthFlow, AuthMode};
use crate::state::router::Section;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let auth = expect_context::<RwSignal<AuthFlow>>();

    let identity = move || session.with(|s| s.identity().cloned());
    let loaded = move || session.with(SessionStore::is_loaded);
    let signed_in = move || session.with(SessionStore::is_authenticated);
    let mobile_open = move || ui.with(|u| u.mobile_menu_open);
    let open_auth = move |mode: AuthMode| auth.update(|flow| flow.open(mode));

    view! {
        <header class="header">
            <div class="header__bar">
                <button class="header__brand" on:click=move |_| ui.update(|u| u.navigate(Section::Home))>
                    <span class="header__logo">"</>"</span>
                    <span class="header__title">"CodeCraft Academy"</span>
                </button>

                <nav class="header__nav">
                    <SectionLinks ui=ui class_prefix="header__nav-item"/>
                </nav>

                <button
                    class="header__menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                >
                    {move || if mobile_open() { "✕" } else { "☰" }}
                </button>

                <div class="header__account">
                    <Show when=loaded>
                        <Show
                            when=signed_in
                            fallback=move || {
                                view! {
                                    <button class="btn btn--ghost" on:click=move |_| open_auth(AuthMode::SignIn)>
                                        "Sign In"
                                    </button>
                                    <button class="btn btn--primary" on:click=move |_| open_auth(AuthMode::SignUp)>
                                        "Sign Up"
                                    </button>
                                }
                            }
                        >
                            <div class="header__profile">
                                <button class="header__avatar-button" on:click=move |_| ui.update(UiState::toggle_profile_menu)>
                                    <img
                                        class="header__avatar"
                                        src=move || identity().map(|i| i.avatar_url).unwrap_or_default()
                                        alt=move || identity().map(|i| i.name).unwrap_or_default()
                                    />
                                    <span class="header__first-name">
                                        {move || identity().map(|i| i.first_name().to_owned()).unwrap_or_default()}
                                    </span>
                                </button>
                                <Show when=move || ui.with(|u| u.profile_menu_open)>
                                    <UserProfileMenu/>
                                </Show>
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>

            <Show when=mobile_open>
                <nav class="header__mobile-nav">
                    <SectionLinks ui=ui class_prefix="header__mobile-item"/>
                </nav>
            </Show>
        </header>
    }
}

/// One button per section, highlighting the active one.
#[component]
fn SectionLinks(ui: RwSignal<UiState>, class_prefix: &'static str) -> impl IntoView {
    let active_class = format!("{class_prefix}--active");
    Section::ALL
        .into_iter()
        .map(|section| {
            let active_class = active_class.clone();
            let is_active = move || ui.with(|u| u.router.active() == section);
            view! {
                <button
                    class=move || if is_active() { format!("{class_prefix} {active_class}") } else { class_prefix.to_owned() }
                    on:click=move |_| ui.update(|u| u.navigate(section))
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view()
}
