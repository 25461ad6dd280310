//! Scene graph arena: nodes, node kinds, properties and animator bindings.

use crate::foundation::core::{Affine, DMat4, DVec3, Vec2};
use crate::foundation::error::{SceneError, SceneResult};
use crate::graph::property::Property;

/// Handle of a node inside a [`SceneGraph`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shape drawn at the ends of an open stroke or dash.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum StrokeCap {
    /// No cap; the stroke ends flush with the path end.
    #[default]
    Flat,
    /// Square extending half the thickness past the end.
    Square,
    /// Semicircle.
    Round,
    /// Triangle.
    Triangle,
}

/// Join drawn where two stroke segments meet.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum StrokeLineJoin {
    /// Sharp corner, limited by the miter limit.
    #[default]
    Miter,
    /// Cut-off corner.
    Bevel,
    /// Rounded corner.
    Round,
    /// Miter, falling back to bevel past the limit.
    MiterOrBevel,
}

/// Transform properties of a visual (3-D space). `None` means "use the default".
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VisualTransform {
    pub center_point: Option<DVec3>,
    pub scale: Option<DVec3>,
    pub rotation_angle_in_degrees: Option<f64>,
    pub rotation_axis: Option<DVec3>,
    pub offset: Option<DVec3>,
    pub transform_matrix: Option<DMat4>,
}

/// Transform properties of a shape (2-D space). `None` means "use the default".
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeTransform {
    pub center_point: Option<Vec2>,
    pub scale: Option<Vec2>,
    pub rotation_angle_in_degrees: Option<f64>,
    pub offset: Option<Vec2>,
    pub transform_matrix: Option<Affine>,
}

/// Stroke styling of a sprite shape.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub start_cap: Option<StrokeCap>,
    pub dash_cap: Option<StrokeCap>,
    pub end_cap: Option<StrokeCap>,
    pub miter_limit: Option<f64>,
    pub line_join: Option<StrokeLineJoin>,
    pub thickness: Option<f64>,
}

/// Trim window shared by every geometry kind.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Trim {
    pub trim_start: Option<f64>,
    pub trim_end: Option<f64>,
    pub trim_offset: Option<f64>,
}

/// A visual that only groups its children.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContainerVisual {
    pub transform: VisualTransform,
    pub children: Vec<NodeId>,
}

/// A visual painted with a brush.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpriteVisual {
    pub transform: VisualTransform,
    pub children: Vec<NodeId>,
    pub brush: Option<NodeId>,
}

/// A visual that hosts a tree of 2-D shapes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeVisual {
    pub transform: VisualTransform,
    pub children: Vec<NodeId>,
    pub shapes: Vec<NodeId>,
}

/// A shape that only groups other shapes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContainerShape {
    pub transform: ShapeTransform,
    pub shapes: Vec<NodeId>,
}

/// A shape that fills and/or strokes one geometry.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpriteShape {
    pub transform: ShapeTransform,
    pub stroke: StrokeStyle,
    pub geometry: Option<NodeId>,
    pub fill_brush: Option<NodeId>,
    pub stroke_brush: Option<NodeId>,
}

/// Ellipse outline.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EllipseGeometry {
    pub center: Option<Vec2>,
    pub radius: Option<Vec2>,
    pub trim: Trim,
}

/// Axis-aligned rectangle outline.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RectangleGeometry {
    pub offset: Option<Vec2>,
    pub size: Option<Vec2>,
    pub trim: Trim,
}

/// Rectangle outline with rounded corners.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RoundedRectangleGeometry {
    pub offset: Option<Vec2>,
    pub size: Option<Vec2>,
    pub corner_radius: Option<Vec2>,
    pub trim: Trim,
}

/// Arbitrary path outline, as SVG path data. May be open or closed.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PathGeometry {
    pub path_data: String,
    pub trim: Trim,
}

/// Solid color brush (straight RGBA8).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorBrush {
    pub color: Option<[u8; 4]>,
}

/// One key frame of a [`KeyFrameAnimation`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyFrame {
    /// Position in `[0, 1]` along the animation.
    pub progress: f64,
    /// Value at that position, typed by the animated property.
    pub value: serde_json::Value,
}

/// Time-driven animation defined by key frames.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KeyFrameAnimation {
    pub duration_secs: f64,
    pub key_frames: Vec<KeyFrame>,
}

/// Animation defined by an expression evaluated every frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExpressionAnimation {
    pub expression: String,
}

/// Closed set of node kinds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum NodeKind {
    /// 3-D grouping visual.
    ContainerVisual(ContainerVisual),
    /// 3-D brush-painted visual.
    SpriteVisual(SpriteVisual),
    /// 3-D visual hosting shapes.
    ShapeVisual(ShapeVisual),
    /// 2-D grouping shape.
    ContainerShape(ContainerShape),
    /// 2-D shape drawing one geometry.
    SpriteShape(SpriteShape),
    /// Closed ellipse geometry.
    EllipseGeometry(EllipseGeometry),
    /// Closed rectangle geometry.
    RectangleGeometry(RectangleGeometry),
    /// Closed rounded-rectangle geometry.
    RoundedRectangleGeometry(RoundedRectangleGeometry),
    /// Path geometry.
    PathGeometry(PathGeometry),
    /// Solid color brush.
    ColorBrush(ColorBrush),
    /// Key frame animation.
    KeyFrameAnimation(KeyFrameAnimation),
    /// Expression animation.
    ExpressionAnimation(ExpressionAnimation),
}

impl NodeKind {
    /// Short kind name used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ContainerVisual(_) => "ContainerVisual",
            Self::SpriteVisual(_) => "SpriteVisual",
            Self::ShapeVisual(_) => "ShapeVisual",
            Self::ContainerShape(_) => "ContainerShape",
            Self::SpriteShape(_) => "SpriteShape",
            Self::EllipseGeometry(_) => "EllipseGeometry",
            Self::RectangleGeometry(_) => "RectangleGeometry",
            Self::RoundedRectangleGeometry(_) => "RoundedRectangleGeometry",
            Self::PathGeometry(_) => "PathGeometry",
            Self::ColorBrush(_) => "ColorBrush",
            Self::KeyFrameAnimation(_) => "KeyFrameAnimation",
            Self::ExpressionAnimation(_) => "ExpressionAnimation",
        }
    }

    /// The trim window when this is a geometry.
    pub fn trim(&self) -> Option<&Trim> {
        match self {
            Self::EllipseGeometry(g) => Some(&g.trim),
            Self::RectangleGeometry(g) => Some(&g.trim),
            Self::RoundedRectangleGeometry(g) => Some(&g.trim),
            Self::PathGeometry(g) => Some(&g.trim),
            _ => None,
        }
    }

    fn push_references(&self, out: &mut Vec<NodeId>) {
        match self {
            Self::ContainerVisual(v) => out.extend_from_slice(&v.children),
            Self::SpriteVisual(v) => {
                out.extend_from_slice(&v.children);
                out.extend(v.brush);
            }
            Self::ShapeVisual(v) => {
                out.extend_from_slice(&v.children);
                out.extend_from_slice(&v.shapes);
            }
            Self::ContainerShape(s) => out.extend_from_slice(&s.shapes),
            Self::SpriteShape(s) => {
                out.extend(s.geometry);
                out.extend(s.fill_brush);
                out.extend(s.stroke_brush);
            }
            Self::EllipseGeometry(_)
            | Self::RectangleGeometry(_)
            | Self::RoundedRectangleGeometry(_)
            | Self::PathGeometry(_)
            | Self::ColorBrush(_)
            | Self::KeyFrameAnimation(_)
            | Self::ExpressionAnimation(_) => {}
        }
    }
}

/// Binding of a named property to a time-varying animation node.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Animator {
    /// Target property name, optionally with a channel suffix (`"Offset.X"`).
    pub property: String,
    /// The animation driving the property.
    pub animation: NodeId,
}

impl Animator {
    /// `true` when this animator drives `property` or one of its channels.
    pub fn targets(&self, property: &str) -> bool {
        match self.property.strip_prefix(property) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

/// A vertex of the scene graph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animators: Vec<Animator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

impl Node {
    /// A node of `kind` with no animators and no descriptions.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            animators: Vec::new(),
            short_description: None,
            long_description: None,
        }
    }

    /// Bind `property` (or one of its channels) to `animation`.
    pub fn animate(&mut self, property: impl Into<String>, animation: NodeId) {
        self.animators.push(Animator {
            property: property.into(),
            animation,
        });
    }

    /// Builder form of [`Node::animate`].
    pub fn with_animator(mut self, property: impl Into<String>, animation: NodeId) -> Self {
        self.animate(property, animation);
        self
    }

    /// `true` when any animator drives `property`.
    pub fn is_animated(&self, property: Property) -> bool {
        self.animators.iter().any(|a| a.targets(property.name()))
    }

    /// Unbind every animator driving `property`. Returns how many were removed.
    pub fn stop_animation(&mut self, property: Property) -> usize {
        let before = self.animators.len();
        self.animators.retain(|a| !a.targets(property.name()));
        before - self.animators.len()
    }

    /// Handles this node refers to: structural children, geometry, brushes and animations.
    pub fn references(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.push_references(&mut out);
        out
    }

    pub(crate) fn push_references(&self, out: &mut Vec<NodeId>) {
        self.kind.push_references(out);
        out.extend(self.animators.iter().map(|a| a.animation));
    }
}

/// Arena owning every node of a scene. Edges are [`NodeId`] handles.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` and return its handle.
    pub fn add(&mut self, node: Node) -> NodeId {
        debug_assert!(u32::try_from(self.nodes.len()).is_ok());
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append a node of `kind` without animators.
    pub fn add_kind(&mut self, kind: NodeKind) -> NodeId {
        self.add(Node::new(kind))
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.idx())
    }

    /// Iterate over `(handle, node)` pairs in arena order.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId uses 32-bit indices by design."
    )]
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Check that `root` and every reference resolve, and that the graph reachable from
    /// `root` has no cycles.
    pub fn validate(&self, root: NodeId) -> SceneResult<()> {
        if self.node(root).is_none() {
            return Err(SceneError::validation(format!(
                "root {root} is out of range ({} nodes)",
                self.len()
            )));
        }
        for (id, node) in self.iter() {
            for r in node.references() {
                if self.node(r).is_none() {
                    return Err(SceneError::validation(format!(
                        "{} {id} refers to missing node {r}",
                        node.kind.name()
                    )));
                }
            }
        }

        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            Open,
            Done,
        }

        // Iterative three-color DFS; an edge into an `Open` node closes a cycle.
        let mut marks = vec![Mark::Unvisited; self.len()];
        let mut stack = vec![(root, false)];
        while let Some((id, exiting)) = stack.pop() {
            if exiting {
                marks[id.idx()] = Mark::Done;
                continue;
            }
            match marks[id.idx()] {
                Mark::Done => continue,
                Mark::Open => {
                    return Err(SceneError::validation(format!("cycle through node {id}")));
                }
                Mark::Unvisited => {}
            }
            marks[id.idx()] = Mark::Open;
            stack.push((id, true));
            if let Some(node) = self.node(id) {
                for r in node.references() {
                    match marks[r.idx()] {
                        Mark::Open => {
                            return Err(SceneError::validation(format!(
                                "cycle through node {r}"
                            )));
                        }
                        Mark::Unvisited => stack.push((r, false)),
                        Mark::Done => {}
                    }
                }
            }
        }
        Ok(())
    }
}

/// Serialized form of a scene: the arena plus its root handle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDocument {
    pub root: NodeId,
    pub graph: SceneGraph,
}

impl SceneDocument {
    /// Parse a document from JSON. Does not validate.
    pub fn from_json_str(s: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn to_json_string_pretty(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// See [`SceneGraph::validate`].
    pub fn validate(&self) -> SceneResult<()> {
        self.graph.validate(self.root)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/model.rs"]
mod tests;
