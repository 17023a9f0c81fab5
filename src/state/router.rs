//! Top-level section routing.
//!
//! DESIGN
//! ======
//! The active section lives in memory only; it is never reflected in the URL.
//! What actually renders is decided by [`screen_for`], which folds in the
//! session so protected sections can never show content to an anonymous user.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::fmt;
use std::str::FromStr;

/// Fixed set of top-level views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Dashboard,
    Projects,
    Ai,
    Creative,
}

impl Section {
    pub const ALL: [Section; 5] = [Section::Home, Section::Dashboard, Section::Projects, Section::Ai, Section::Creative];

    /// Stable lowercase id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::Projects => "projects",
            Self::Ai => "ai",
            Self::Creative => "creative",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::Ai => "AI Helper",
            Self::Creative => "Creative",
        }
    }

    /// Whether the section requires a signed-in identity.
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Home)
    }

    /// Lenient parse for rendering: unknown ids fall back to `Home`.
    pub fn parse_or_home(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A section id outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

/// What the main area renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Dashboard,
    Workspace,
    Assistant,
    Library,
    /// A protected section was requested without a session.
    AuthPrompt(Section),
    /// A protected section was requested before the persisted session was read.
    Restoring,
}

/// Map a section to its screen given the session state.
pub fn screen_for(section: Section, authenticated: bool) -> Screen {
    if section.is_protected() && !authenticated {
        return Screen::AuthPrompt(section);
    }
    match section {
        Section::Home => Screen::Landing,
        Section::Dashboard => Screen::Dashboard,
        Section::Projects => Screen::Workspace,
        Section::Ai => Screen::Assistant,
        Section::Creative => Screen::Library,
    }
}

/// Screen for `section` while the persisted session is still unread.
pub fn screen_while_restoring(section: Section) -> Screen {
    if section.is_protected() { Screen::Restoring } else { screen_for(section, false) }
}

/// Holds the active section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionRouter {
    active: Section,
}

impl SectionRouter {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn navigate(&mut self, section: Section) {
        if self.active != section {
            log::debug!("navigate {} -> {}", self.active, section);
        }
        self.active = section;
    }

    /// Return to the landing section.
    pub fn reset(&mut self) {
        self.navigate(Section::Home);
    }

    /// Screen for the active section.
    pub fn screen(&self, authenticated: bool) -> Screen {
        screen_for(self.active, authenticated)
    }
}
