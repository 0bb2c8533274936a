/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures and the navigable views (data.rs)
/// - The key-value backing and its on-disk implementation (backing.rs)
/// - The persisted content store over the three collections (content.rs)

pub mod backing;
pub mod content;
pub mod data;
