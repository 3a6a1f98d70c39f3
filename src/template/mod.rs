//! Template selection: request parameters -> [`ResolvedTemplate`](resolved::ResolvedTemplate).

/// Request parameter parsing and the [`SceneRequest`](request::SceneRequest) union.
pub mod request;
/// Fully defaulted template field sets.
pub mod resolved;
/// Static section-banner lookup table.
pub mod sections;
/// Variant resolution, including the metadata fetch for detail cards.
pub mod selector;
