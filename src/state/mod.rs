//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each model is plain Rust with no signal types inside. Models that outlive a
//! single section (session, router, auth dialog, notices) are wrapped in an
//! `RwSignal` by `app::App` and provided via context. Per-section models are
//! created by the page that renders them and dropped when it unmounts.
//! Components mutate all of them only through the methods defined here.

pub mod assistant;
pub mod auth_flow;
pub mod dashboard;
pub mod library;
pub mod notice;
pub mod router;
pub mod session;
pub mod ui;
pub mod workspace;
