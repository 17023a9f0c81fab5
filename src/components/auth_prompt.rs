//! Placeholder shown in place of a protected section while signed out.

use leptos::prelude::*;

use crate::state::auth_flow::{AuthFlow, AuthMode};
use crate::state::router::Section;

#[component]
pub fn AuthPrompt(section: Section) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthFlow>>();

    view! {
        <section class="auth-prompt">
            <div class="auth-prompt__card">
                <div class="auth-prompt__icon">"🔒"</div>
                <h2>{format!("Sign in to open {}", section.label())}</h2>
                <p class="auth-prompt__hint">
                    "Create a free account to track courses, build projects, and chat with your AI helper."
                </p>
                <div class="auth-prompt__actions">
                    <button class="btn btn--primary" on:click=move |_| auth.update(|a| a.open(AuthMode::SignIn))>
                        "Sign In"
                    </button>
                    <button class="btn" on:click=move |_| auth.update(|a| a.open(AuthMode::SignUp))>
                        "Sign Up"
                    </button>
                </div>
            </div>
        </section>
    }
}
