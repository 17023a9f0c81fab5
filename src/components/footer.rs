//! Site footer with link columns and social links.

use leptos::prelude::*;

use crate::catalog::footer::{LINK_COLUMNS, SocialLink, navigation_message};
use crate::state::notice::NoticeState;
use crate::util::browser;

#[component]
pub fn Footer() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <span class="footer__title">"CodeCraft Academy"</span>
                    <p class="footer__tagline">
                        "Empowering the next generation of developers with fun, interactive learning experiences and AI-powered tools."
                    </p>
                    <div class="footer__socials">
                        {SocialLink::ALL
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <button
                                        class="footer__social"
                                        title=link.label()
                                        on:click=move |_| browser::open_in_new_tab(link.url())
                                    >
                                        {link.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                {LINK_COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div class="footer__column">
                                <h3>{column.title}</h3>
                                <ul>
                                    {column
                                        .links
                                        .iter()
                                        .map(|link| {
                                            let link = *link;
                                            view! {
                                                <li>
                                                    <button
                                                        class="footer__link"
                                                        on:click=move |_| {
                                                            notices.update(|n| {
                                                                n.info(navigation_message(link));
                                                            });
                                                        }
                                                    >
                                                        {link}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="footer__bottom">
                <p>"Made with ❤️ for aspiring developers"</p>
                <p>"© 2025 CodeCraft Academy. All rights reserved."</p>
            </div>
        </footer>
    }
}
