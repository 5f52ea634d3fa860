//! Graph elements - styled nodes and edges as handed to the renderer.

use curriculum::DisplayConfig;
use serde::Serialize;
use std::collections::HashSet;

use super::NodeId;

/// Node shapes understood by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Box,
    Ellipse,
    Dot,
}

/// Label font hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeFont {
    pub size: u32,
    pub color: String,
}

impl NodeFont {
    pub fn new(size: u32, color: impl Into<String>) -> Self {
        Self {
            size,
            color: color.into(),
        }
    }
}

/// A styled graph node. Identity is the `id` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub size: u32,
    pub shape: NodeShape,
    pub color: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<NodeFont>,

    /// Outline width; concepts with activities get a thicker one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// What an edge encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Domain to strand, or strand to concept.
    Hierarchy,
    /// Concept to concept cross-reference.
    Interconnection,
}

/// An undirected edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub color: String,
    pub kind: EdgeKind,
}

impl GraphEdge {
    /// Create a hierarchy edge.
    pub fn hierarchy(source: NodeId, target: NodeId, color: impl Into<String>) -> Self {
        Self {
            source,
            target,
            color: color.into(),
            kind: EdgeKind::Hierarchy,
        }
    }

    /// Create a concept interconnection edge.
    pub fn interconnection(source: NodeId, target: NodeId, color: impl Into<String>) -> Self {
        Self {
            source,
            target,
            color: color.into(),
            kind: EdgeKind::Interconnection,
        }
    }

    /// Check whether the edge touches a node, in either direction.
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }
}

/// A built graph: a set of nodes keyed by id, and a multiset of edges.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConceptGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,

    /// Ids already present in `nodes`.
    #[serde(skip)]
    node_ids: HashSet<NodeId>,
}

impl ConceptGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node unless one with the same id already exists.
    ///
    /// Returns `false` when the node was ignored; the first node seen for an
    /// id keeps its attributes.
    pub fn add_node(&mut self, node: GraphNode) -> bool {
        if !self.node_ids.insert(node.id.clone()) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Append an edge. Duplicates are kept.
    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in emission order.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Get a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        if !self.node_ids.contains(id) {
            return None;
        }
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Check if a node exists in the graph.
    pub fn has_node(&self, id: &NodeId) -> bool {
        self.node_ids.contains(id)
    }

    /// Get the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get all edges of one kind.
    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }

    /// Drop repeated edges, keeping the first of each `(source, target, kind)`.
    ///
    /// The builder never calls this. Deduplicating thins out the rendered
    /// hierarchy, so it is left to callers that want strict graph semantics.
    pub fn dedup_edges(&mut self) {
        let mut seen = HashSet::new();
        self.edges
            .retain(|e| seen.insert((e.source.clone(), e.target.clone(), e.kind)));
    }

    /// Bundle the graph with display settings for the rendering surface.
    pub fn render_request<'a>(&'a self, config: &'a DisplayConfig) -> RenderRequest<'a> {
        RenderRequest {
            nodes: &self.nodes,
            edges: &self.edges,
            config,
        }
    }
}

/// Everything the rendering surface needs to draw one graph.
#[derive(Debug, Clone, Serialize)]
pub struct RenderRequest<'a> {
    pub nodes: &'a [GraphNode],
    pub edges: &'a [GraphEdge],
    pub config: &'a DisplayConfig,
}
