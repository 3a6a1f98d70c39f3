//! Scene graph: drawable nodes in paint order, their SVG serialization, and the template
//! composer that builds them.

/// Template -> scene composition.
pub mod compose;
/// Scene document and node types.
pub mod model;
/// SVG serialization of a scene document.
pub mod svg;
