//! Top-level screens selected by the section router.

pub mod assistant;
pub mod dashboard;
pub mod landing;
pub mod library;
pub mod workspace;
