use super::*;
use crate::config::SimulatedDelays;
use crate::net::identity::{IdentityProvider, SimulatedIdentityProvider, fabricate_identity};
use crate::net::types::Contact;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

fn open_signup_with(name: &str, email: &str, password: &str) -> AuthFlow {
    let mut flow = AuthFlow::default();
    flow.open(AuthMode::SignUp);
    flow.form.name = name.to_owned();
    flow.form.email = email.to_owned();
    flow.form.password = password.to_owned();
    flow.form.confirm_password = password.to_owned();
    flow
}

// =============================================================
// Opening / closing
// =============================================================

#[test]
fn default_flow_is_closed() {
    let flow = AuthFlow::default();
    assert_eq!(flow.phase, AuthPhase::Closed);
    assert!(!flow.is_open());
}

#[test]
fn open_sets_mode_and_email_method() {
    let mut flow = AuthFlow::default();
    flow.method = AuthMethod::Phone;
    flow.open(AuthMode::SignUp);
    assert_eq!(flow.phase, AuthPhase::Open);
    assert_eq!(flow.mode, AuthMode::SignUp);
    assert_eq!(flow.method, AuthMethod::Email);
    assert_eq!(flow.form, AuthForm::default());
    assert_eq!(flow.form.country_code, "+1");
}

#[test]
fn reopening_clears_previous_form_and_error() {
    let mut flow = open_signup_with("A", "", "pw");
    let _ = flow.begin_submit(CredentialPolicy::Permissive);
    assert!(flow.error.is_some());
    flow.close();
    flow.open(AuthMode::SignIn);
    assert!(flow.error.is_none());
    assert!(flow.form.name.is_empty());
}

#[test]
fn mode_switches_freely_while_open() {
    let mut flow = AuthFlow::default();
    flow.open(AuthMode::SignIn);
    flow.toggle_mode();
    assert_eq!(flow.mode, AuthMode::SignUp);
    flow.set_mode(AuthMode::SignIn);
    assert_eq!(flow.mode, AuthMode::SignIn);
}

#[test]
fn mode_switch_ignored_while_submitting() {
    let mut flow = open_signup_with("Ana", "ana@example.com", "pw");
    flow.begin_submit(CredentialPolicy::Permissive).unwrap();
    flow.toggle_mode();
    assert_eq!(flow.mode, AuthMode::SignUp);
}

// =============================================================
// Method switching
// =============================================================

#[test]
fn switching_to_phone_clears_email_and_passwords() {
    let mut flow = open_signup_with("Ana", "ana@example.com", "pw");
    flow.set_method(AuthMethod::Phone);
    assert_eq!(flow.method, AuthMethod::Phone);
    assert!(flow.form.email.is_empty());
    assert!(flow.form.password.is_empty());
    assert!(flow.form.confirm_password.is_empty());
    assert_eq!(flow.form.name, "Ana");
}

#[test]
fn switching_back_to_email_clears_phone_and_country() {
    let mut flow = AuthFlow::default();
    flow.open(AuthMode::SignIn);
    flow.set_method(AuthMethod::Phone);
    flow.form.phone = "5550100".to_owned();
    flow.form.country_code = "+81".to_owned();
    flow.set_method(AuthMethod::Email);
    assert!(flow.form.phone.is_empty());
    assert_eq!(flow.form.country_code, "+1");
}

#[test]
fn selecting_same_method_keeps_fields() {
    let mut flow = open_signup_with("Ana", "ana@example.com", "pw");
    flow.set_method(AuthMethod::Email);
    assert_eq!(flow.form.email, "ana@example.com");
    assert_eq!(flow.form.password, "pw");
}

#[test]
fn credentials_follow_method() {
    let mut flow = open_signup_with(" Ana ", " ana@example.com ", "pw");
    assert_eq!(
        flow.credentials(),
        Credentials::Email {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            password: "pw".to_owned(),
            confirm_password: "pw".to_owned(),
        }
    );
    flow.set_method(AuthMethod::Phone);
    flow.form.phone = "7700900123".to_owned();
    flow.form.country_code = "+44".to_owned();
    assert!(matches!(
        flow.credentials(),
        Credentials::Phone { ref country_code, ref phone, .. } if country_code == "+44" && phone == "7700900123"
    ));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn begin_submit_requires_open_dialog() {
    let mut flow = AuthFlow::default();
    assert_eq!(flow.begin_submit(CredentialPolicy::Permissive), Err(AuthError::NotOpen));
}

#[test]
fn second_submit_while_pending_is_rejected() {
    let mut flow = open_signup_with("Ana", "ana@example.com", "pw");
    let first = flow.begin_submit(CredentialPolicy::Permissive).unwrap();
    assert!(flow.is_submitting());
    assert_eq!(flow.begin_submit(CredentialPolicy::Permissive), Err(AuthError::AlreadySubmitting));
    assert_eq!(flow.begin_oauth(), Err(AuthError::AlreadySubmitting));

    let identity = fabricate_identity(first.credentials.clone(), "id".to_owned());
    assert!(flow.finish(first.ticket, Ok(identity)).is_some());
}

#[test]
fn invalid_form_stays_open_with_error() {
    let mut flow = open_signup_with("", "ana@example.com", "pw");
    let err = flow.begin_submit(CredentialPolicy::Permissive).unwrap_err();
    assert_eq!(err, AuthError::Invalid("Enter your full name.".to_owned()));
    assert_eq!(flow.phase, AuthPhase::Open);
    assert_eq!(flow.error.as_deref(), Some("Enter your full name."));
}

#[test]
fn result_after_close_is_discarded() {
    let mut flow = open_signup_with("Ana", "ana@example.com", "pw");
    let pending = flow.begin_submit(CredentialPolicy::Permissive).unwrap();
    flow.close();
    let identity = fabricate_identity(pending.credentials, "id".to_owned());
    assert_eq!(flow.finish(pending.ticket, Ok(identity)), None);
    assert_eq!(flow.phase, AuthPhase::Closed);
}

#[test]
fn result_for_superseded_ticket_is_discarded() {
    let mut flow = open_signup_with("Ana", "ana@example.com", "pw");
    let stale = flow.begin_submit(CredentialPolicy::Permissive).unwrap();
    flow.close();
    flow.open(AuthMode::SignIn);
    flow.form.email = "ana@example.com".to_owned();
    flow.form.password = "pw".to_owned();
    let current = flow.begin_submit(CredentialPolicy::Permissive).unwrap();
    assert_ne!(stale.ticket, current.ticket);

    let stale_identity = fabricate_identity(stale.credentials, "stale".to_owned());
    assert_eq!(flow.finish(stale.ticket, Ok(stale_identity)), None);
    assert!(flow.is_submitting());

    let fresh = fabricate_identity(current.credentials, "fresh".to_owned());
    assert_eq!(flow.finish(current.ticket, Ok(fresh)).map(|i| i.id), Some("fresh".to_owned()));
}

#[test]
fn provider_failure_returns_to_open_with_error() {
    let mut flow = open_signup_with("Ana", "ana@example.com", "pw");
    let pending = flow.begin_submit(CredentialPolicy::Permissive).unwrap();
    let out = flow.finish(pending.ticket, Err(AuthError::Provider("timeout".to_owned())));
    assert_eq!(out, None);
    assert_eq!(flow.phase, AuthPhase::Open);
    assert_eq!(flow.error.as_deref(), Some("sign-in failed: timeout"));
    assert!(flow.begin_submit(CredentialPolicy::Permissive).is_ok());
}

#[test]
fn success_closes_and_clears_form() {
    let mut flow = open_signup_with("Ana", "ana@example.com", "pw");
    let pending = flow.begin_submit(CredentialPolicy::Permissive).unwrap();
    let identity = fabricate_identity(pending.credentials, "id".to_owned());
    assert!(flow.finish(pending.ticket, Ok(identity)).is_some());
    assert_eq!(flow.phase, AuthPhase::Closed);
    assert_eq!(flow.form, AuthForm::default());
}

#[test]
fn oauth_skips_form_validation() {
    let mut flow = AuthFlow::default();
    flow.open(AuthMode::SignIn);
    let pending = flow.begin_oauth().unwrap();
    assert_eq!(pending.credentials, Credentials::Google);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn signup_submission_sets_session_exactly_once() {
    let storage = MemoryStorage::new();
    let mut session = SessionStore::new(storage.clone(), "codecraft_academy_user");
    let provider = SimulatedIdentityProvider::new(SimulatedDelays::instant());
    let mut flow = open_signup_with("Maya Chen", "maya@example.com", "correct horse");

    let pending = flow.begin_submit(CredentialPolicy::Permissive).unwrap();
    let result = futures::executor::block_on(provider.submit(pending.mode, pending.credentials));
    assert!(complete_submission(&mut flow, &mut session, pending.ticket, result));

    // A duplicate delivery of the same result must not set the session again.
    let replay = fabricate_identity(Credentials::Google, "dup".to_owned());
    assert!(!complete_submission(&mut flow, &mut session, pending.ticket, Ok(replay)));

    assert_eq!(storage.write_count(), 1);
    let identity = session.identity().unwrap();
    assert_eq!(identity.name, "Maya Chen");
    assert_eq!(identity.contact, Contact::Email { email: "maya@example.com".to_owned() });
    assert!(!flow.is_open());
}

#[test]
fn result_for_closed_dialog_leaves_session_empty() {
    let storage = MemoryStorage::new();
    let mut session = SessionStore::new(storage.clone(), "codecraft_academy_user");
    let mut flow = open_signup_with("Ana", "ana@example.com", "pw");
    let pending = flow.begin_submit(CredentialPolicy::Permissive).unwrap();
    flow.close();

    let identity = fabricate_identity(pending.credentials, "late".to_owned());
    assert!(!complete_submission(&mut flow, &mut session, pending.ticket, Ok(identity)));
    assert!(!session.is_authenticated());
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn provider_failure_leaves_session_empty() {
    let mut session = SessionStore::new(MemoryStorage::new(), "codecraft_academy_user");
    let mut flow = open_signup_with("Ana", "ana@example.com", "pw");
    let pending = flow.begin_submit(CredentialPolicy::Permissive).unwrap();

    let failed = Err(AuthError::Provider("timeout".to_owned()));
    assert!(!complete_submission(&mut flow, &mut session, pending.ticket, failed));
    assert!(!session.is_authenticated());
    assert_eq!(flow.error.as_deref(), Some("sign-in failed: timeout"));
}

// =============================================================
// CredentialPolicy
// =============================================================

fn email_creds(name: &str, email: &str, password: &str, confirm: &str) -> Credentials {
    Credentials::Email {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

fn phone_creds(phone: &str, password: &str) -> Credentials {
    Credentials::Phone {
        name: String::new(),
        country_code: "+1".to_owned(),
        phone: phone.to_owned(),
        password: password.to_owned(),
        confirm_password: String::new(),
    }
}

#[test]
fn permissive_accepts_any_non_blank_input() {
    let policy = CredentialPolicy::Permissive;
    assert_eq!(policy.check(AuthMode::SignIn, &email_creds("", "x", "y", "")), Ok(()));
    assert_eq!(policy.check(AuthMode::SignUp, &email_creds("N", "x", "y", "z")), Ok(()));
    assert_eq!(policy.check(AuthMode::SignIn, &phone_creds("12", "p")), Ok(()));
}

#[test]
fn permissive_requires_fields_per_mode() {
    let policy = CredentialPolicy::Permissive;
    assert_eq!(
        policy.check(AuthMode::SignIn, &email_creds("", "  ", "pw", "")),
        Err("Enter your email address.".to_owned())
    );
    assert_eq!(
        policy.check(AuthMode::SignIn, &email_creds("", "a@b.co", "", "")),
        Err("Enter your password.".to_owned())
    );
    assert_eq!(
        policy.check(AuthMode::SignUp, &email_creds("Ana", "a@b.co", "pw", "")),
        Err("Confirm your password.".to_owned())
    );
    assert_eq!(policy.check(AuthMode::SignIn, &phone_creds("", "pw")), Err("Enter your phone number.".to_owned()));
}

#[test]
fn google_always_passes() {
    assert_eq!(CredentialPolicy::Strict.check(AuthMode::SignUp, &Credentials::Google), Ok(()));
}

#[test]
fn strict_rejects_malformed_email() {
    let policy = CredentialPolicy::Strict;
    for bad in ["plain", "@example.com", "a@b", "a@.com", "a@com.", "a@b@c.com"] {
        assert_eq!(
            policy.check(AuthMode::SignIn, &email_creds("", bad, "long enough", "")),
            Err("Enter a valid email address.".to_owned()),
            "{bad}"
        );
    }
    assert_eq!(policy.check(AuthMode::SignIn, &email_creds("", "a@b.co", "long enough", "")), Ok(()));
}

#[test]
fn strict_rejects_short_password_and_mismatch() {
    let policy = CredentialPolicy::Strict;
    assert_eq!(
        policy.check(AuthMode::SignIn, &email_creds("", "a@b.co", "short", "")),
        Err("Password must be at least 8 characters.".to_owned())
    );
    assert_eq!(
        policy.check(AuthMode::SignUp, &email_creds("Ana", "a@b.co", "long enough", "long enuff")),
        Err("Passwords do not match.".to_owned())
    );
    assert_eq!(policy.check(AuthMode::SignUp, &email_creds("Ana", "a@b.co", "long enough", "long enough")), Ok(()));
}

#[test]
fn strict_checks_phone_digits() {
    let policy = CredentialPolicy::Strict;
    assert_eq!(
        policy.check(AuthMode::SignIn, &phone_creds("12345", "long enough")),
        Err("Enter a valid phone number.".to_owned())
    );
    assert_eq!(
        policy.check(AuthMode::SignIn, &phone_creds("555-01x0", "long enough")),
        Err("Enter a valid phone number.".to_owned())
    );
    assert_eq!(policy.check(AuthMode::SignIn, &phone_creds("555 0100 22", "long enough")), Ok(()));
}

#[test]
fn auth_mode_ids_and_toggle() {
    assert_eq!(AuthMode::SignIn.as_str(), "signin");
    assert_eq!(AuthMode::SignUp.as_str(), "signup");
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
}
