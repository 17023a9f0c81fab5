//! Toast stack rendering `NoticeState`.
//!
//! Each notice dismisses itself after the configured TTL, or immediately when
//! clicked.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::notice::{NoticeKind, NoticeState};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let ttl_ms = expect_context::<ClientConfig>().notice_ttl_ms;

    view! {
        <div class="notice-stack" aria-live="polite">
            <For
                each=move || notices.with(|n| n.items.clone())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    schedule_dismiss(notices, id, ttl_ms);
                    view! {
                        <div
                            class="notice"
                            class:notice--success=notice.kind == NoticeKind::Success
                            class:notice--error=notice.kind == NoticeKind::Error
                            on:click=move |_| notices.update(|n| n.dismiss(id))
                        >
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}

fn schedule_dismiss(notices: RwSignal<NoticeState>, id: u64, ttl_ms: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::util::delay::sleep(crate::util::delay::millis(ttl_ms)).await;
        notices.update(|n| n.dismiss(id));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (notices, id, ttl_ms);
}
