//! Reusable UI components shared across pages.

pub mod auth_modal;
pub mod auth_prompt;
pub mod footer;
pub mod header;
pub mod notice_stack;
pub mod user_profile_menu;
