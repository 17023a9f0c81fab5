//! Dropdown with the signed-in student's profile, stats, and logout.

use leptos::prelude::*;

use crate::catalog::dashboard::{PROFILE_MENU_ITEMS, PROFILE_STATS};
use crate::config::ClientConfig;
use crate::state::notice::NoticeState;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;

#[component]
pub fn UserProfileMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ClientConfig>();

    let logging_out = RwSignal::new(false);
    let identity = move || session.with(|s| s.identity().cloned());
    let close = move || ui.update(|u| u.profile_menu_open = false);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let on_logout = move |_| {
        if logging_out.get() {
            return;
        }
        logging_out.set(true);
        let wait_ms = config.delays.sign_out_ms;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::util::delay::sleep(crate::util::delay::millis(wait_ms)).await;
            logging_out.set(false);
            ui.update(|ui| {
                ui.profile_menu_open = false;
                session.update(|store| {
                    if let Err(e) = store.clear(&mut ui.router) {
                        log::warn!("logout could not remove stored session: {e}");
                    }
                });
            });
            log::info!("signed out");
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = wait_ms;
    };

    view! {
        <div class="profile-menu" tabindex="0" on:keydown=on_keydown>
            <div class="profile-menu__head">
                <img
                    class="profile-menu__avatar"
                    src=move || identity().map(|i| i.avatar_url).unwrap_or_default()
                    alt=move || identity().map(|i| i.name).unwrap_or_default()
                />
                <div class="profile-menu__who">
                    <span class="profile-menu__name">{move || identity().map(|i| i.name).unwrap_or_default()}</span>
                    <span class="profile-menu__contact">
                        {move || identity().map(|i| i.contact_label().to_owned()).unwrap_or_default()}
                    </span>
                    <span class="profile-menu__badge">"Pro Student"</span>
                </div>
                <button class="profile-menu__close" aria-label="Close" on:click=move |_| close()>
                    "✕"
                </button>
            </div>

            <div class="profile-menu__stats">
                {PROFILE_STATS
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="profile-menu__stat">
                                <span class="profile-menu__stat-value">{*value}</span>
                                <span class="profile-menu__stat-label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <ul class="profile-menu__items">
                {PROFILE_MENU_ITEMS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        view! {
                            <li>
                                <button
                                    class="profile-menu__item"
                                    on:click=move |_| {
                                        notices.update(|n| {
                                            n.info(format!("Opening {item}..."));
                                        });
                                    }
                                >
                                    {item}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button class="btn btn--danger profile-menu__logout" on:click=on_logout disabled=move || logging_out.get()>
                {move || if logging_out.get() { "Logging out..." } else { "Log Out" }}
            </button>
        </div>
    }
}
