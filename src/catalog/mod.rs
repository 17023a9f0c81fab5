//! Static mock content rendered by the views.
//!
//! Catalog data never changes at runtime; view state that reacts to it lives
//! in `crate::state`.

pub mod assistant;
pub mod dashboard;
pub mod footer;
pub mod landing;
pub mod library;
pub mod workspace;
