//! Identity provider boundary for sign-in and sign-up.
//!
//! The simulated provider accepts whatever credentials reach it: validation
//! happens earlier, in the auth flow's credential policy. After the configured
//! latency it fabricates an identity from the submitted fields.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use futures::future::{FutureExt, LocalBoxFuture};

use super::types::{Contact, Credentials, Identity, avatar_url};
use crate::config::SimulatedDelays;
use crate::state::auth_flow::{AuthError, AuthMode};
use crate::util::delay;

const DEFAULT_DISPLAY_NAME: &str = "Student";

/// Exchanges submitted credentials for an identity.
pub trait IdentityProvider {
    fn submit(&self, mode: AuthMode, credentials: Credentials) -> LocalBoxFuture<'static, Result<Identity, AuthError>>;
}

/// Provider that waits, then fabricates an identity locally.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedIdentityProvider {
    delays: SimulatedDelays,
}

impl SimulatedIdentityProvider {
    pub fn new(delays: SimulatedDelays) -> Self {
        Self { delays }
    }
}

impl IdentityProvider for SimulatedIdentityProvider {
    fn submit(&self, mode: AuthMode, credentials: Credentials) -> LocalBoxFuture<'static, Result<Identity, AuthError>> {
        let wait_ms = match credentials {
            Credentials::Google => self.delays.oauth_ms,
            Credentials::Email { .. } | Credentials::Phone { .. } => self.delays.sign_in_ms,
        };
        async move {
            delay::sleep(delay::millis(wait_ms)).await;
            let identity = fabricate_identity(credentials, uuid::Uuid::new_v4().to_string());
            log::info!("simulated {} completed for {}", mode.as_str(), identity.id);
            Ok(identity)
        }
        .boxed_local()
    }
}

/// Build the identity a real provider would have returned for `credentials`.
pub fn fabricate_identity(credentials: Credentials, id: String) -> Identity {
    match credentials {
        Credentials::Email { name, email, .. } => Identity {
            id,
            name: display_name(&name),
            avatar_url: avatar_url(&email),
            contact: Contact::Email { email },
        },
        Credentials::Phone { name, country_code, phone, .. } => Identity {
            id,
            name: display_name(&name),
            avatar_url: avatar_url(&phone),
            contact: Contact::Phone { phone: format!("{country_code}{phone}") },
        },
        Credentials::Google => Identity {
            id,
            name: "Google User".to_owned(),
            avatar_url: avatar_url("google"),
            contact: Contact::OAuth { provider: "google".to_owned(), email: "user@gmail.com".to_owned() },
        },
    }
}

fn display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() { DEFAULT_DISPLAY_NAME.to_owned() } else { trimmed.to_owned() }
}
