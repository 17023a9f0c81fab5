//! Sign-in / sign-up modal state machine.
//!
//! DESIGN
//! ======
//! `Closed -> Open(mode, method) -> Submitting(ticket) -> Closed | Open(error)`.
//!
//! Every submission gets a ticket from a monotonically increasing sequence.
//! Closing the modal or starting a new submission bumps the sequence, so a
//! provider result that arrives late can be recognized and dropped. A second
//! submit while one is in flight is rejected outright.
//!
//! Credential checks are a configurable [`CredentialPolicy`]; the identity
//! provider itself never rejects input.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use super::session::SessionStore;
use crate::net::types::{Credentials, Identity};
use crate::util::storage::SessionStorage;

/// Country dialing codes offered by the phone form.
pub const COUNTRY_CODES: [&str; 5] = ["+1", "+44", "+91", "+86", "+81"];

const MIN_STRICT_PASSWORD_CHARS: usize = 8;
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "signin",
            Self::SignUp => "signup",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMethod {
    #[default]
    Email,
    Phone,
    Google,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// Errors surfaced by the auth flow and identity providers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth dialog is not open")]
    NotOpen,

    #[error("a sign-in request is already in progress")]
    AlreadySubmitting,

    /// Rejected by the credential policy; the message is user-facing.
    #[error("{0}")]
    Invalid(String),

    /// The identity provider failed.
    #[error("sign-in failed: {0}")]
    Provider(String),
}

/// How strictly submitted credentials are checked before reaching the provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// Any non-blank input is accepted.
    #[default]
    Permissive,
    /// Non-blank plus email/phone shape, password length, and matching confirmation.
    Strict,
}

impl CredentialPolicy {
    /// Check `credentials` for `mode`, returning a user-facing reason on failure.
    ///
    /// # Errors
    ///
    /// Returns the first failed rule as a message suitable for the form.
    pub fn check(self, mode: AuthMode, credentials: &Credentials) -> Result<(), String> {
        let (name, password, confirm) = match credentials {
            Credentials::Google => return Ok(()),
            Credentials::Email { name, email, password, confirm_password } => {
                require(email, "Enter your email address.")?;
                if self == Self::Strict && !looks_like_email(email) {
                    return Err("Enter a valid email address.".to_owned());
                }
                (name, password, confirm_password)
            }
            Credentials::Phone { name, phone, password, confirm_password, .. } => {
                require(phone, "Enter your phone number.")?;
                if self == Self::Strict && !looks_like_phone(phone) {
                    return Err("Enter a valid phone number.".to_owned());
                }
                (name, password, confirm_password)
            }
        };

        if mode == AuthMode::SignUp {
            require(name, "Enter your full name.")?;
        }
        require(password, "Enter your password.")?;
        if mode == AuthMode::SignUp {
            require(confirm, "Confirm your password.")?;
        }

        if self == Self::Strict {
            if password.chars().count() < MIN_STRICT_PASSWORD_CHARS {
                return Err(format!("Password must be at least {MIN_STRICT_PASSWORD_CHARS} characters."));
            }
            if mode == AuthMode::SignUp && password != confirm {
                return Err("Passwords do not match.".to_owned());
            }
        }
        Ok(())
    }
}

fn require(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() { Err(message.to_owned()) } else { Ok(()) }
}

fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn looks_like_phone(raw: &str) -> bool {
    let allowed = raw.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-');
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    allowed && (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

/// Form field values bound to the modal inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            country_code: COUNTRY_CODES[0].to_owned(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

/// A submission that passed validation and awaits the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: u64,
    pub mode: AuthMode,
    pub credentials: Credentials,
}

/// Auth modal state.
#[derive(Clone, Debug, Default)]
pub struct AuthFlow {
    pub phase: AuthPhase,
    pub mode: AuthMode,
    pub method: AuthMethod,
    pub form: AuthForm,
    pub show_password: bool,
    /// Last validation or provider failure, shown above the submit button.
    pub error: Option<String>,
    seq: u64,
}

impl AuthFlow {
    pub fn is_open(&self) -> bool {
        self.phase != AuthPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == AuthPhase::Submitting
    }

    /// Open the modal in `mode` with a blank email form.
    pub fn open(&mut self, mode: AuthMode) {
        self.bump();
        self.phase = AuthPhase::Open;
        self.mode = mode;
        self.method = AuthMethod::Email;
        self.form = AuthForm::default();
        self.show_password = false;
        self.error = None;
        log::debug!("auth dialog opened ({})", mode.as_str());
    }

    /// Close the modal, superseding any in-flight submission.
    pub fn close(&mut self) {
        if self.phase == AuthPhase::Submitting {
            log::debug!("auth dialog closed with submission {} in flight", self.seq);
        }
        self.bump();
        self.phase = AuthPhase::Closed;
        self.error = None;
    }

    /// Switch between sign-in and sign-up. Ignored while submitting.
    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.phase != AuthPhase::Open {
            return;
        }
        self.mode = mode;
        self.error = None;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Switch method, clearing the fields that belong to the other methods.
    ///
    /// Ignored while submitting.
    pub fn set_method(&mut self, method: AuthMethod) {
        if self.phase != AuthPhase::Open || self.method == method {
            return;
        }
        match method {
            AuthMethod::Email => {
                self.form.phone.clear();
                self.form.country_code = COUNTRY_CODES[0].to_owned();
            }
            AuthMethod::Phone => self.form.email.clear(),
            AuthMethod::Google => {
                self.form.email.clear();
                self.form.phone.clear();
            }
        }
        self.form.password.clear();
        self.form.confirm_password.clear();
        self.method = method;
        self.error = None;
    }

    /// Credentials for the current method built from the form.
    pub fn credentials(&self) -> Credentials {
        let form = &self.form;
        match self.method {
            AuthMethod::Email => Credentials::Email {
                name: form.name.trim().to_owned(),
                email: form.email.trim().to_owned(),
                password: form.password.clone(),
                confirm_password: form.confirm_password.clone(),
            },
            AuthMethod::Phone => Credentials::Phone {
                name: form.name.trim().to_owned(),
                country_code: form.country_code.clone(),
                phone: form.phone.trim().to_owned(),
                password: form.password.clone(),
                confirm_password: form.confirm_password.clone(),
            },
            AuthMethod::Google => Credentials::Google,
        }
    }

    /// Validate the form and move to `Submitting`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NotOpen`] when the modal is closed
    /// - [`AuthError::AlreadySubmitting`] while a submission is in flight
    /// - [`AuthError::Invalid`] when the policy rejects the form; the message
    ///   is also stored in `error`
    pub fn begin_submit(&mut self, policy: CredentialPolicy) -> Result<PendingSubmission, AuthError> {
        self.ensure_idle()?;
        let credentials = self.credentials();
        if let Err(message) = policy.check(self.mode, &credentials) {
            self.error = Some(message.clone());
            return Err(AuthError::Invalid(message));
        }
        Ok(self.start(credentials))
    }

    /// Start a Google sign-in; no form validation applies.
    ///
    /// # Errors
    ///
    /// Same state errors as [`Self::begin_submit`].
    pub fn begin_oauth(&mut self) -> Result<PendingSubmission, AuthError> {
        self.ensure_idle()?;
        Ok(self.start(Credentials::Google))
    }

    /// Apply a provider result for `ticket`.
    ///
    /// Returns the identity to hand to the session store, or `None` when the
    /// ticket is stale or the provider failed (the failure lands in `error`).
    pub fn finish(&mut self, ticket: u64, result: Result<Identity, AuthError>) -> Option<Identity> {
        if self.phase != AuthPhase::Submitting || ticket != self.seq {
            log::debug!("discarding stale auth result for submission {ticket}");
            return None;
        }
        match result {
            Ok(identity) => {
                self.phase = AuthPhase::Closed;
                self.form = AuthForm::default();
                self.error = None;
                Some(identity)
            }
            Err(e) => {
                log::warn!("submission {ticket} failed: {e}");
                self.phase = AuthPhase::Open;
                self.error = Some(e.to_string());
                None
            }
        }
    }

    fn ensure_idle(&self) -> Result<(), AuthError> {
        match self.phase {
            AuthPhase::Closed => Err(AuthError::NotOpen),
            AuthPhase::Submitting => Err(AuthError::AlreadySubmitting),
            AuthPhase::Open => Ok(()),
        }
    }

    fn start(&mut self, credentials: Credentials) -> PendingSubmission {
        self.bump();
        self.phase = AuthPhase::Submitting;
        self.error = None;
        log::debug!("submission {} started ({})", self.seq, self.mode.as_str());
        PendingSubmission { ticket: self.seq, mode: self.mode, credentials }
    }

    fn bump(&mut self) {
        self.seq = self.seq.wrapping_add(1);
    }
}

/// Apply a provider result for `ticket` and start the session on success.
///
/// Returns `true` when `session` now holds the new identity. Stale tickets and
/// provider failures leave the session untouched. A failed storage write is
/// logged; the in-memory session is still set.
pub fn complete_submission<S: SessionStorage>(
    flow: &mut AuthFlow,
    session: &mut SessionStore<S>,
    ticket: u64,
    result: Result<Identity, AuthError>,
) -> bool {
    let Some(identity) = flow.finish(ticket, result) else {
        return false;
    };
    if let Err(e) = session.set(identity) {
        log::warn!("signed in but the session was not persisted: {e}");
    }
    true
}
