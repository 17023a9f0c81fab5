//! Browser and runtime helpers.
//!
//! Each module keeps a native fallback next to its `hydrate` implementation so
//! state and pages compile and test without a browser.

pub mod browser;
pub mod delay;
pub mod markdown;
pub mod storage;
