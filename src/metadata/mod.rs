//! Metadata collaborator boundary.
//!
//! The preview pipeline only needs the narrow detail shape defined in [`detail`]; the TMDB
//! client in [`tmdb`] is the default production source.

/// Domain detail types and the [`MetadataSource`](detail::MetadataSource) trait.
pub mod detail;
/// TMDB-backed metadata source.
pub mod tmdb;
