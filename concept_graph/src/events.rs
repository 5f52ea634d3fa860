//! Click events reported by the rendering surface.

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// A clicked node, either as a bare id or as a node object carrying one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClickedNode {
    Id(String),
    Node {
        #[serde(default)]
        id: String,
    },
}

impl ClickedNode {
    /// The raw node identifier.
    pub fn id(&self) -> &str {
        match self {
            ClickedNode::Id(id) | ClickedNode::Node { id } => id,
        }
    }
}

/// Interaction payload from the renderer. Both lists may be empty, e.g. when
/// the user clicks empty canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClickEvent {
    #[serde(default)]
    pub nodes: Vec<ClickedNode>,

    #[serde(default)]
    pub edges: Vec<String>,
}

impl ClickEvent {
    /// A click on a single node.
    pub fn node(id: impl Into<String>) -> Self {
        Self {
            nodes: vec![ClickedNode::Id(id.into())],
            edges: Vec::new(),
        }
    }

    /// A click on empty space.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a renderer payload.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The first clicked node id. Only this one is acted on.
    pub fn primary_node(&self) -> Option<&str> {
        self.nodes.first().map(ClickedNode::id)
    }

    /// The first clicked node id, parsed.
    pub fn primary_node_id(&self) -> Option<NodeId> {
        self.primary_node().and_then(NodeId::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_node_takes_first() {
        let json = r#"{"nodes": ["concept::Force", "concept::Energy"], "edges": []}"#;
        let event = ClickEvent::from_json_str(json).unwrap();

        assert_eq!(event.primary_node(), Some("concept::Force"));
        assert_eq!(event.primary_node_id(), Some(NodeId::concept("Force")));
    }

    #[test]
    fn test_node_objects() {
        let json = r#"{"nodes": [{"id": "strand::Motion", "label": "Motion"}]}"#;
        let event = ClickEvent::from_json_str(json).unwrap();

        assert_eq!(event.primary_node(), Some("strand::Motion"));
    }

    #[test]
    fn test_node_object_without_id() {
        let event = ClickEvent::from_json_str(r#"{"nodes": [{}]}"#).unwrap();
        assert_eq!(event.primary_node(), Some(""));
        assert!(event.primary_node_id().is_none());
    }

    #[test]
    fn test_empty_payload() {
        let event = ClickEvent::from_json_str("{}").unwrap();
        assert_eq!(event, ClickEvent::empty());
        assert!(event.primary_node().is_none());
    }
}
