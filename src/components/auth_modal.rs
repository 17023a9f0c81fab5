//! Sign-in / sign-up dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `AuthFlow` and forwards accepted submissions to the injected
//! `IdentityProvider`. The provider result is applied through
//! `complete_submission`, so a reply for a dialog that was closed (or resubmitted)
//! in the meantime never reaches the session store.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::Backends;
use crate::net::identity::IdentityProvider;
use crate::state::auth_flow::{AuthError, AuthFlow, AuthMethod, AuthMode, COUNTRY_CODES, PendingSubmission};
use crate::state::notice::NoticeState;
use crate::state::session::SessionStore;

#[component]
pub fn AuthModal() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthFlow>>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let backends = expect_context::<Backends>();
    let policy = expect_context::<ClientConfig>().credential_policy;

    let provider = StoredValue::new(backends.identity);

    let mode = move || auth.with(|a| a.mode);
    let method = move || auth.with(|a| a.method);
    let submitting = move || auth.with(AuthFlow::is_submitting);
    let show_password = move || auth.with(|a| a.show_password);
    let is_signup = move || mode() == AuthMode::SignUp;

    let close = move || auth.update(AuthFlow::close);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match auth.try_update(|flow| flow.begin_submit(policy)) {
            Some(Ok(pending)) => dispatch(pending, provider.get_value(), auth, session),
            Some(Err(AuthError::Invalid(reason))) => log::debug!("auth form rejected: {reason}"),
            Some(Err(e)) => log::debug!("auth submit ignored: {e}"),
            None => {}
        }
    };

    let on_google = move |_| match auth.try_update(AuthFlow::begin_oauth) {
        Some(Ok(pending)) => dispatch(pending, provider.get_value(), auth, session),
        Some(Err(e)) => log::debug!("google sign-in ignored: {e}"),
        None => {}
    };

    let password_type = move || if show_password() { "text" } else { "password" };

    view! {
        <Show when=move || auth.with(AuthFlow::is_open)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class="dialog dialog--auth"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <div class="dialog__header">
                        <h2>{move || if is_signup() { "Join CodeCraft Academy" } else { "Welcome Back!" }}</h2>
                        <button class="dialog__close" aria-label="Close" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>

                    <div class="auth__methods">
                        <button
                            class="auth__method"
                            class:auth__method--active=move || method() == AuthMethod::Email
                            disabled=submitting
                            on:click=move |_| auth.update(|a| a.set_method(AuthMethod::Email))
                        >
                            "Email"
                        </button>
                        <button
                            class="auth__method"
                            class:auth__method--active=move || method() == AuthMethod::Phone
                            disabled=submitting
                            on:click=move |_| auth.update(|a| a.set_method(AuthMethod::Phone))
                        >
                            "Phone"
                        </button>
                    </div>

                    <button class="btn auth__google" disabled=submitting on:click=on_google>
                        "Continue with Google"
                    </button>

                    <div class="auth__divider">"or"</div>

                    <form class="auth__form" on:submit=on_submit>
                        <Show when=is_signup>
                            <label class="auth__label">
                                "Full Name"
                                <input
                                    class="auth__input"
                                    type="text"
                                    placeholder="Enter your full name"
                                    prop:value=move || auth.with(|a| a.form.name.clone())
                                    on:input=move |ev| auth.update(|a| a.form.name = event_target_value(&ev))
                                />
                            </label>
                        </Show>

                        <Show
                            when=move || method() == AuthMethod::Phone
                            fallback=move || {
                                view! {
                                    <label class="auth__label">
                                        "Email Address"
                                        <input
                                            class="auth__input"
                                            type="email"
                                            placeholder="Enter your email"
                                            prop:value=move || auth.with(|a| a.form.email.clone())
                                            on:input=move |ev| auth.update(|a| a.form.email = event_target_value(&ev))
                                        />
                                    </label>
                                }
                            }
                        >
                            <label class="auth__label">
                                "Phone Number"
                                <div class="auth__phone-row">
                                    <select
                                        class="auth__country"
                                        prop:value=move || auth.with(|a| a.form.country_code.clone())
                                        on:change=move |ev| auth.update(|a| a.form.country_code = event_target_value(&ev))
                                    >
                                        {COUNTRY_CODES
                                            .iter()
                                            .map(|code| view! { <option value=*code>{*code}</option> })
                                            .collect_view()}
                                    </select>
                                    <input
                                        class="auth__input"
                                        type="tel"
                                        placeholder="Enter phone number"
                                        prop:value=move || auth.with(|a| a.form.phone.clone())
                                        on:input=move |ev| auth.update(|a| a.form.phone = event_target_value(&ev))
                                    />
                                </div>
                            </label>
                        </Show>

                        <label class="auth__label">
                            "Password"
                            <div class="auth__password-row">
                                <input
                                    class="auth__input"
                                    type=password_type
                                    placeholder="Enter your password"
                                    prop:value=move || auth.with(|a| a.form.password.clone())
                                    on:input=move |ev| auth.update(|a| a.form.password = event_target_value(&ev))
                                />
                                <button
                                    class="auth__reveal"
                                    type="button"
                                    on:click=move |_| auth.update(|a| a.show_password = !a.show_password)
                                >
                                    {move || if show_password() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </label>

                        <Show when=is_signup>
                            <label class="auth__label">
                                "Confirm Password"
                                <input
                                    class="auth__input"
                                    type=password_type
                                    placeholder="Confirm your password"
                                    prop:value=move || auth.with(|a| a.form.confirm_password.clone())
                                    on:input=move |ev| {
                                        auth.update(|a| a.form.confirm_password = event_target_value(&ev));
                                    }
                                />
                            </label>
                        </Show>

                        {move || auth.with(|a| a.error.clone()).map(|error| view! { <p class="auth__error">{error}</p> })}

                        <button class="btn btn--primary auth__submit" type="submit" disabled=submitting>
                            {move || match (mode(), submitting()) {
                                (AuthMode::SignIn, true) => "Signing In...",
                                (AuthMode::SignUp, true) => "Creating Account...",
                                (AuthMode::SignIn, false) => "Sign In",
                                (AuthMode::SignUp, false) => "Create Account",
                            }}
                        </button>
                    </form>

                    <p class="auth__switch">
                        {move || if is_signup() { "Already have an account? " } else { "Don't have an account? " }}
                        <button class="auth__link" disabled=submitting on:click=move |_| auth.update(AuthFlow::toggle_mode)>
                            {move || if is_signup() { "Sign In" } else { "Sign Up" }}
                        </button>
                    </p>

                    <Show when=move || !is_signup()>
                        <button
                            class="auth__link auth__forgot"
                            on:click=move |_| {
                                notices.update(|n| {
                                    n.info("Password reset is not available yet.");
                                });
                            }
                        >
                            "Forgot your password?"
                        </button>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

/// Run an accepted submission against the provider and apply the outcome.
fn dispatch(
    pending: PendingSubmission,
    provider: Arc<dyn IdentityProvider + Send + Sync>,
    auth: RwSignal<AuthFlow>,
    session: RwSignal<SessionStore>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let PendingSubmission { ticket, mode, credentials } = pending;
        let result = provider.submit(mode, credentials).await;
        auth.update(|flow| {
            session.update(|store| {
                crate::state::auth_flow::complete_submission(flow, store, ticket, result);
            });
        });
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (pending, provider, auth, session);
}
