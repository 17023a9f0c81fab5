//! Shared DTOs for the client's external boundaries.
//!
//! DESIGN
//! ======
//! `Identity` is the only record that leaves memory (it is persisted as JSON),
//! so its shape is explicit: the contact detail is a tagged union instead of
//! optional `email`/`phone` fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// How the user can be reached, keyed by the sign-in method that created it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Contact {
    Email { email: String },
    Phone { phone: String },
    #[serde(rename = "oauth")]
    OAuth { provider: String, email: String },
}

/// The signed-in user's locally stored profile record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identity id (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar_url: String,
    pub contact: Contact,
}

impl Identity {
    /// First word of the display name, used in compact header chrome.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// The email address or phone number shown under the name.
    pub fn contact_label(&self) -> &str {
        match &self.contact {
            Contact::Email { email } | Contact::OAuth { email, .. } => email,
            Contact::Phone { phone } => phone,
        }
    }
}

/// Avatar URL generated from a stable seed.
pub fn avatar_url(seed: &str) -> String {
    format!("{AVATAR_BASE_URL}?seed={seed}")
}

/// Credentials submitted by the auth modal, one variant per method.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Email {
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    },
    Phone {
        name: String,
        country_code: String,
        phone: String,
        password: String,
        confirm_password: String,
    },
    Google,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email { name, email, .. } => f
                .debug_struct("Email")
                .field("name", name)
                .field("email", email)
                .finish_non_exhaustive(),
            Self::Phone { name, country_code, phone, .. } => f
                .debug_struct("Phone")
                .field("name", name)
                .field("country_code", country_code)
                .field("phone", phone)
                .finish_non_exhaustive(),
            Self::Google => f.write_str("Google"),
        }
    }
}

/// Result of a simulated asset download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadLink {
    pub asset_id: u32,
    pub url: String,
}
