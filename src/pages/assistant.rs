//! AI helper chat view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Prompts go through the injected `AssistantBackend`; `AssistantState`
//! refuses a second send while a reply is pending. Assistant bubbles render as
//! Markdown with raw HTML stripped.

use leptos::prelude::*;

use crate::catalog::assistant::{FEATURES, QUICK_PROMPTS};
use crate::net::Backends;
use crate::state::assistant::{AssistantState, MessageRole};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn AssistantPage() -> impl IntoView {
    let assistant = RwSignal::new(AssistantState::default());
    let backend = StoredValue::new(expect_context::<Backends>().assistant);

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = assistant.with(|a| (a.messages.len(), a.loading));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let Some(prompt) = assistant.try_update(AssistantState::begin_send).flatten() else {
            return;
        };
        let backend = backend.get_value();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let reply = backend.ask(prompt).await;
            if let Err(e) = &reply {
                log::warn!("assistant reply failed: {e}");
            }
            assistant.update(|a| a.receive_reply(reply));
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (prompt, backend);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let loading = move || assistant.with(|a| a.loading);
    let can_send = move || assistant.with(AssistantState::can_send);

    view! {
        <section class="assistant">
            <div class="assistant__header">
                <h1>"🤖 AI Coding Assistant"</h1>
                <p>"Get instant help with coding, debugging, and creative ideas"</p>
            </div>

            <div class="assistant__grid">
                <div class="panel assistant__chat">
                    <div class="assistant__messages" node_ref=messages_ref>
                        <For
                            each=move || assistant.with(|a| a.messages.clone())
                            key=|msg| msg.id.clone()
                            children=move |msg| {
                                let is_assistant = msg.role == MessageRole::Assistant;
                                let is_user = msg.role == MessageRole::User;
                                let is_error = msg.role == MessageRole::Error;
                                view! {
                                    <div
                                        class="assistant__message"
                                        class:assistant__message--assistant=is_assistant
                                        class:assistant__message--user=is_user
                                        class:assistant__message--error=is_error
                                    >
                                        {if is_assistant {
                                            let rendered = render_markdown_html(&msg.content);
                                            view! { <div class="assistant__markdown" inner_html=rendered></div> }
                                                .into_any()
                                        } else {
                                            view! { <p class="assistant__text">{msg.content}</p> }.into_any()
                                        }}
                                        <span class="assistant__time">{msg.time_label}</span>
                                    </div>
                                }
                            }
                        />
                        {move || loading().then(|| view! { <div class="assistant__typing">"Thinking..."</div> })}
                    </div>

                    <div class="assistant__input-row">
                        <textarea
                            class="assistant__input"
                            rows="2"
                            placeholder="Ask me anything about coding..."
                            prop:value=move || assistant.with(|a| a.draft.clone())
                            on:input=move |ev| assistant.update(|a| a.draft = event_target_value(&ev))
                            on:keydown=on_keydown
                        ></textarea>
                        <button class="btn btn--primary assistant__send" on:click=move |_| do_send() disabled=move || !can_send()>
                            "Send"
                        </button>
                    </div>
                </div>

                <aside class="assistant__sidebar">
                    <div class="panel">
                        <h3>"Quick Actions"</h3>
                        {QUICK_PROMPTS
                            .iter()
                            .map(|quick| {
                                let prompt = quick.prompt;
                                view! {
                                    <button class="quick-action" on:click=move |_| assistant.update(|a| a.use_quick_action(prompt))>
                                        <span class="quick-action__icon">{quick.icon}</span>
                                        <span>{quick.label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="panel">
                        <h3>"AI Features"</h3>
                        <ul class="assistant__features">
                            {FEATURES
                                .iter()
                                .map(|(feature, description)| {
                                    view! {
                                        <li>
                                            <span class="assistant__feature">{*feature}</span>
                                            <span class="assistant__feature-desc">{*description}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </aside>
            </div>
        </section>
    }
}
