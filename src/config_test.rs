use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = ClientConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.session_key, "codecraft_academy_user");
    assert_eq!(cfg.credential_policy, CredentialPolicy::Permissive);
    assert_eq!(cfg.delays.sign_in_ms, 2000);
    assert_eq!(cfg.delays.oauth_ms, 1500);
    assert_eq!(cfg.notice_ttl_ms, 4000);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("CODECRAFT_SESSION_KEY", "demo_user"),
        ("CODECRAFT_CREDENTIAL_POLICY", "strict"),
        ("CODECRAFT_SIGN_IN_DELAY_MS", "10"),
        ("CODECRAFT_ASSISTANT_DELAY_MS", " 25 "),
        ("CODECRAFT_NOTICE_TTL_MS", "900"),
    ]))
    .unwrap();
    assert_eq!(cfg.session_key, "demo_user");
    assert_eq!(cfg.credential_policy, CredentialPolicy::Strict);
    assert_eq!(cfg.delays.sign_in_ms, 10);
    assert_eq!(cfg.delays.assistant_reply_ms, 25);
    assert_eq!(cfg.delays.project_save_ms, 1500);
    assert_eq!(cfg.notice_ttl_ms, 900);
}

#[test]
fn from_lookup_invalid_delay_falls_back_to_default() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("CODECRAFT_RUN_DELAY_MS", "soon")])).unwrap();
    assert_eq!(cfg.delays.project_run_ms, 2000);
}

#[test]
fn from_lookup_blank_session_key_uses_default() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("CODECRAFT_SESSION_KEY", "   ")])).unwrap();
    assert_eq!(cfg.session_key, DEFAULT_SESSION_KEY);
}

#[test]
fn from_lookup_rejects_unknown_policy() {
    let err = ClientConfig::from_lookup(lookup_from(&[("CODECRAFT_CREDENTIAL_POLICY", "oauth-only")])).unwrap_err();
    assert_eq!(err, ConfigError::UnknownPolicy("oauth-only".to_owned()));
    assert_eq!(err.to_string(), "unknown CODECRAFT_CREDENTIAL_POLICY: oauth-only");
}

#[test]
fn instant_delays_are_all_zero() {
    let d = SimulatedDelays::instant();
    assert_eq!(
        [
            d.sign_in_ms,
            d.oauth_ms,
            d.sign_out_ms,
            d.assistant_reply_ms,
            d.project_run_ms,
            d.project_save_ms,
            d.asset_download_ms,
            d.course_start_ms,
        ],
        [0; 8]
    );
}
