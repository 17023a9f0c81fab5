//! Client configuration resolved from the build environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so settings are baked
//! in with `option_env!` at compile time. Parsing goes through
//! [`ClientConfig::from_lookup`] so it can be tested with plain closures.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::auth_flow::CredentialPolicy;

pub const DEFAULT_SESSION_KEY: &str = "codecraft_academy_user";
pub const DEFAULT_NOTICE_TTL_MS: u64 = 4000;

/// Configuration parse failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `CODECRAFT_CREDENTIAL_POLICY` named an unsupported policy.
    #[error("unknown CODECRAFT_CREDENTIAL_POLICY: {0}")]
    UnknownPolicy(String),
}

/// Simulated latency for every mocked service call, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDelays {
    pub sign_in_ms: u64,
    pub oauth_ms: u64,
    pub sign_out_ms: u64,
    pub assistant_reply_ms: u64,
    pub project_run_ms: u64,
    pub project_save_ms: u64,
    pub asset_download_ms: u64,
    pub course_start_ms: u64,
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        Self {
            sign_in_ms: 2000,
            oauth_ms: 1500,
            sign_out_ms: 1000,
            assistant_reply_ms: 1000,
            project_run_ms: 2000,
            project_save_ms: 1500,
            asset_download_ms: 1000,
            course_start_ms: 1000,
        }
    }
}

impl SimulatedDelays {
    /// All delays zero; useful for tests and previews.
    pub fn instant() -> Self {
        Self {
            sign_in_ms: 0,
            oauth_ms: 0,
            sign_out_ms: 0,
            assistant_reply_ms: 0,
            project_run_ms: 0,
            project_save_ms: 0,
            asset_download_ms: 0,
            course_start_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Local-storage key holding the persisted identity.
    pub session_key: String,
    pub credential_policy: CredentialPolicy,
    pub delays: SimulatedDelays,
    pub notice_ttl_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_owned(),
            credential_policy: CredentialPolicy::default(),
            delays: SimulatedDelays::default(),
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a captured value is unsupported.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "CODECRAFT_SESSION_KEY" => option_env!("CODECRAFT_SESSION_KEY"),
                "CODECRAFT_CREDENTIAL_POLICY" => option_env!("CODECRAFT_CREDENTIAL_POLICY"),
                "CODECRAFT_SIGN_IN_DELAY_MS" => option_env!("CODECRAFT_SIGN_IN_DELAY_MS"),
                "CODECRAFT_OAUTH_DELAY_MS" => option_env!("CODECRAFT_OAUTH_DELAY_MS"),
                "CODECRAFT_SIGN_OUT_DELAY_MS" => option_env!("CODECRAFT_SIGN_OUT_DELAY_MS"),
                "CODECRAFT_ASSISTANT_DELAY_MS" => option_env!("CODECRAFT_ASSISTANT_DELAY_MS"),
                "CODECRAFT_RUN_DELAY_MS" => option_env!("CODECRAFT_RUN_DELAY_MS"),
                "CODECRAFT_SAVE_DELAY_MS" => option_env!("CODECRAFT_SAVE_DELAY_MS"),
                "CODECRAFT_DOWNLOAD_DELAY_MS" => option_env!("CODECRAFT_DOWNLOAD_DELAY_MS"),
                "CODECRAFT_COURSE_DELAY_MS" => option_env!("CODECRAFT_COURSE_DELAY_MS"),
                "CODECRAFT_NOTICE_TTL_MS" => option_env!("CODECRAFT_NOTICE_TTL_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Optional:
    /// - `CODECRAFT_SESSION_KEY`: default `codecraft_academy_user`
    /// - `CODECRAFT_CREDENTIAL_POLICY`: `permissive` (default) or `strict`
    /// - `CODECRAFT_*_DELAY_MS`, `CODECRAFT_NOTICE_TTL_MS`: unparsable values
    ///   fall back to defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPolicy`] for an unsupported policy name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let session_key = lookup("CODECRAFT_SESSION_KEY")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_KEY.to_owned());
        let credential_policy = parse_policy(lookup("CODECRAFT_CREDENTIAL_POLICY").as_deref())?;

        let defaults = SimulatedDelays::default();
        let ms = |key: &str, default: u64| parse_u64(lookup(key).as_deref(), default);
        let delays = SimulatedDelays {
            sign_in_ms: ms("CODECRAFT_SIGN_IN_DELAY_MS", defaults.sign_in_ms),
            oauth_ms: ms("CODECRAFT_OAUTH_DELAY_MS", defaults.oauth_ms),
            sign_out_ms: ms("CODECRAFT_SIGN_OUT_DELAY_MS", defaults.sign_out_ms),
            assistant_reply_ms: ms("CODECRAFT_ASSISTANT_DELAY_MS", defaults.assistant_reply_ms),
            project_run_ms: ms("CODECRAFT_RUN_DELAY_MS", defaults.project_run_ms),
            project_save_ms: ms("CODECRAFT_SAVE_DELAY_MS", defaults.project_save_ms),
            asset_download_ms: ms("CODECRAFT_DOWNLOAD_DELAY_MS", defaults.asset_download_ms),
            course_start_ms: ms("CODECRAFT_COURSE_DELAY_MS", defaults.course_start_ms),
        };
        let notice_ttl_ms = ms("CODECRAFT_NOTICE_TTL_MS", DEFAULT_NOTICE_TTL_MS);

        Ok(Self { session_key, credential_policy, delays, notice_ttl_ms })
    }
}

fn parse_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn parse_policy(raw: Option<&str>) -> Result<CredentialPolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or("permissive") {
        "permissive" => Ok(CredentialPolicy::Permissive),
        "strict" => Ok(CredentialPolicy::Strict),
        other => Err(ConfigError::UnknownPolicy(other.to_owned())),
    }
}
