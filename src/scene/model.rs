use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::text::layout::TextRun;

/// Paint layer, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Overlay,
    Artwork,
    Text,
}

/// One color stop of a linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient vector, `0..=1`.
    pub offset: f64,
    pub color: Rgba8,
}

/// Fill paint for rectangle nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    /// Linear gradient; `from`/`to` are fractions of the filled rectangle.
    Linear {
        from: Point,
        to: Point,
        stops: Vec<GradientStop>,
    },
}

/// Raster artwork placed into `rect` with a centered cover crop.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageNode {
    /// Image reference (URL or loader-relative path).
    pub href: String,
    pub rect: Rect,
    pub corner_radius: f64,
    /// A required image has no fill underneath it: failing to load it fails the render.
    pub required: bool,
}

/// Horizontal anchoring of text lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Lines start at `origin.x`.
    Start,
    /// Lines are centered on `origin.x`.
    Middle,
}

/// Laid-out text block. `origin.y` is the top of the first line box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub run: TextRun,
    pub origin: Point,
    pub font_size: f64,
    pub line_height: f64,
    pub weight: u16,
    pub fill: Rgba8,
    pub anchor: TextAnchor,
}

/// Rounded pill with a single centered label.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeNode {
    pub rect: Rect,
    pub radius: f64,
    pub fill: Rgba8,
    pub stroke: Option<Rgba8>,
    pub label: String,
    pub font_size: f64,
    pub weight: u16,
    pub text_fill: Rgba8,
}

/// Drawable node.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Fill { rect: Rect, paint: Paint },
    Image(ImageNode),
    Text(TextNode),
    Badge(BadgeNode),
}

/// A node tagged with the layer it was inserted into.
#[derive(Clone, Debug, PartialEq)]
pub struct LayeredNode {
    pub layer: Layer,
    pub node: SceneNode,
}

/// Ordered scene. Insertion order is paint order and is never changed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneDocument {
    canvas: Canvas,
    nodes: Vec<LayeredNode>,
}

impl SceneDocument {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            nodes: Vec::new(),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Append `node` on top of everything pushed so far.
    ///
    /// Layers must be pushed back to front; composing out of order is a programming error.
    pub fn push(&mut self, layer: Layer, node: SceneNode) {
        debug_assert!(
            self.nodes.last().is_none_or(|last| last.layer <= layer),
            "scene node pushed below an upper layer"
        );
        self.nodes.push(LayeredNode { layer, node });
    }

    /// Nodes in paint order.
    pub fn nodes(&self) -> &[LayeredNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` when layers never decrease along paint order.
    pub fn is_back_to_front(&self) -> bool {
        self.nodes.windows(2).all(|w| w[0].layer <= w[1].layer)
    }

    /// Image nodes in paint order.
    pub fn images(&self) -> impl Iterator<Item = &ImageNode> {
        self.nodes.iter().filter_map(|n| match &n.node {
            SceneNode::Image(img) => Some(img),
            _ => None,
        })
    }

    /// Text nodes in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter().filter_map(|n| match &n.node {
            SceneNode::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Badge nodes in paint order.
    pub fn badges(&self) -> impl Iterator<Item = &BadgeNode> {
        self.nodes.iter().filter_map(|n| match &n.node {
            SceneNode::Badge(b) => Some(b),
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
