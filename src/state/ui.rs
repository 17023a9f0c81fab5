//! Navigation chrome: the section router plus the header's menu toggles.
//!
//! Logout resets `router` through `SessionStore::clear`; the menu flags are
//! never persisted.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::router::{Section, SectionRouter};

/// Shared UI state provided via context as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub router: SectionRouter,
    pub mobile_menu_open: bool,
    pub profile_menu_open: bool,
}

impl UiState {
    /// Navigate and collapse the mobile menu.
    pub fn navigate(&mut self, section: Section) {
        self.router.navigate(section);
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }
}
