//! Creative library view state: filters, layout, and liked assets.
//!
//! Nothing here is persisted; leaving the section keeps the state only as long
//! as the signal lives.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use std::collections::BTreeSet;

use crate::catalog::library::{ASSETS, CategoryFilter, CreativeAsset, filter_assets};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LibraryView {
    #[default]
    Grid,
    List,
}

#[derive(Clone, Debug, Default)]
pub struct LibraryState {
    pub filter: CategoryFilter,
    pub view: LibraryView,
    pub search: String,
    pub liked: BTreeSet<u32>,
}

impl LibraryState {
    /// Like or unlike `asset_id`. Returns whether it is now liked.
    pub fn toggle_like(&mut self, asset_id: u32) -> bool {
        if self.liked.remove(&asset_id) {
            false
        } else {
            self.liked.insert(asset_id);
            true
        }
    }

    pub fn is_liked(&self, asset_id: u32) -> bool {
        self.liked.contains(&asset_id)
    }

    /// Catalog assets matching the current search and category.
    pub fn visible(&self) -> Vec<&'static CreativeAsset> {
        filter_assets(ASSETS, &self.search, self.filter)
    }
}
