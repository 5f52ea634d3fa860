//! Graph Builder - turns a flat list of concept records into a styled graph.
//!
//! The build runs in four passes:
//! 1. **Domains**: One box per distinct domain, sorted by name
//! 2. **Strands**: One ellipse per distinct strand, sorted by name
//! 3. **Concepts**: One dot per distinct concept name, in input order
//! 4. **Edges**: Per concept record, the hierarchy pair and any resolvable interconnections

use curriculum::{domain_color, ConceptRecord, Dataset};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, trace};

use super::{ConceptGraph, GraphEdge, GraphNode, NodeFont, NodeId, NodeShape};

/// Sizes and colors applied while building.
#[derive(Debug, Clone)]
pub struct GraphStyle {
    pub domain_size: u32,
    pub domain_font: NodeFont,

    pub strand_size: u32,
    pub strand_color: String,
    pub strand_font: NodeFont,

    pub concept_size: u32,
    pub concept_border_color: String,

    /// Border width for concepts with at least one activity.
    pub emphasized_border_width: u32,
    pub normal_border_width: u32,

    pub hierarchy_edge_color: String,
    pub interconnection_edge_color: String,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            domain_size: 60,
            domain_font: NodeFont::new(18, "white"),
            strand_size: 35,
            strand_color: "#9CA3AF".to_string(),
            strand_font: NodeFont::new(14, "black"),
            concept_size: 22,
            concept_border_color: "#111827".to_string(),
            emphasized_border_width: 3,
            normal_border_width: 1,
            hierarchy_edge_color: "#CBD5E1".to_string(),
            interconnection_edge_color: "#FCA5A5".to_string(),
        }
    }
}

/// Builds a [`ConceptGraph`] from a dataset.
///
/// Building is a pure function of the dataset: the same input always yields
/// the same node set and the same edge sequence.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    style: GraphStyle,
}

impl GraphBuilder {
    /// Create a builder with the given style.
    pub fn new(style: GraphStyle) -> Self {
        Self { style }
    }

    /// Create a builder with the default style.
    pub fn with_defaults() -> Self {
        Self::new(GraphStyle::default())
    }

    /// The style this builder applies.
    pub fn style(&self) -> &GraphStyle {
        &self.style
    }

    /// Build the graph for a dataset.
    pub fn build(&self, dataset: &Dataset) -> ConceptGraph {
        let mut graph = ConceptGraph::new();

        let domains: BTreeSet<&str> = dataset.concepts.iter().map(|c| c.domain.as_str()).collect();
        for domain in domains {
            graph.add_node(self.domain_node(domain));
        }

        let strands: BTreeSet<&str> = dataset.concepts.iter().map(|c| c.strand.as_str()).collect();
        for strand in strands {
            graph.add_node(self.strand_node(strand));
        }

        let with_activities: HashSet<&str> = dataset
            .activities
            .iter()
            .filter_map(|a| a.parent_concept.as_deref())
            .collect();
        for concept in &dataset.concepts {
            let emphasized = with_activities.contains(concept.concept_name.as_str());
            graph.add_node(self.concept_node(concept, emphasized));
        }

        let concept_names = dataset.concept_names();
        for concept in &dataset.concepts {
            self.add_concept_edges(&mut graph, concept, &concept_names);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built concept graph"
        );
        graph
    }

    /// Hierarchy pair plus interconnections for one concept record.
    fn add_concept_edges(
        &self,
        graph: &mut ConceptGraph,
        concept: &ConceptRecord,
        concept_names: &HashSet<&str>,
    ) {
        let domain_id = NodeId::domain(&concept.domain);
        let strand_id = NodeId::strand(&concept.strand);
        let concept_id = NodeId::concept(&concept.concept_name);

        graph.add_edge(GraphEdge::hierarchy(
            domain_id,
            strand_id.clone(),
            &self.style.hierarchy_edge_color,
        ));
        graph.add_edge(GraphEdge::hierarchy(
            strand_id,
            concept_id.clone(),
            &self.style.hierarchy_edge_color,
        ));

        for linked in &concept.interconnections {
            if !concept_names.contains(linked.as_str()) {
                trace!(
                    concept = %concept.concept_name,
                    target = %linked,
                    "dropping dangling interconnection"
                );
                continue;
            }
            graph.add_edge(GraphEdge::interconnection(
                concept_id.clone(),
                NodeId::concept(linked),
                &self.style.interconnection_edge_color,
            ));
        }
    }

    fn domain_node(&self, domain: &str) -> GraphNode {
        GraphNode {
            id: NodeId::domain(domain),
            label: domain_label(domain),
            size: self.style.domain_size,
            shape: NodeShape::Box,
            color: domain_color(domain).to_string(),
            font: Some(self.style.domain_font.clone()),
            border_width: None,
            border_color: None,
        }
    }

    fn strand_node(&self, strand: &str) -> GraphNode {
        GraphNode {
            id: NodeId::strand(strand),
            label: strand.to_string(),
            size: self.style.strand_size,
            shape: NodeShape::Ellipse,
            color: self.style.strand_color.clone(),
            font: Some(self.style.strand_font.clone()),
            border_width: None,
            border_color: None,
        }
    }

    fn concept_node(&self, concept: &ConceptRecord, emphasized: bool) -> GraphNode {
        let border_width = if emphasized {
            self.style.emphasized_border_width
        } else {
            self.style.normal_border_width
        };

        GraphNode {
            id: NodeId::concept(&concept.concept_name),
            label: concept.concept_name.clone(),
            size: self.style.concept_size,
            shape: NodeShape::Dot,
            color: domain_color(&concept.domain).to_string(),
            font: None,
            border_width: Some(border_width),
            border_color: Some(self.style.concept_border_color.clone()),
        }
    }
}

/// Domain names carry a parenthetical subtitle; break the line before it.
pub fn domain_label(domain: &str) -> String {
    domain.replace(" (", "\n(")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EdgeKind;
    use curriculum::ActivityRecord;

    const PHYSICS: &str = "Physics (The Physical World)";
    const BIOLOGY: &str = "Biology (The Living World)";

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec![
                ConceptRecord::new(PHYSICS, "Motion", "Force").with_interconnection("Energy"),
                ConceptRecord::new(PHYSICS, "Motion", "Energy"),
                ConceptRecord::new(BIOLOGY, "Cells", "Cell Wall").with_interconnection("Osmosis"),
            ],
            vec![ActivityRecord::new("Push the cart", "Force")],
        )
    }

    #[test]
    fn test_domain_label() {
        assert_eq!(domain_label(PHYSICS), "Physics\n(The Physical World)");
        assert_eq!(domain_label("Earth & Space Science"), "Earth & Space Science");
    }

    #[test]
    fn test_domains_and_strands_sorted() {
        let graph = GraphBuilder::with_defaults().build(&sample_dataset());

        let ids: Vec<String> = graph.nodes().iter().map(|n| n.id.as_string()).collect();
        assert_eq!(
            ids,
            vec![
                format!("domain::{}", BIOLOGY),
                format!("domain::{}", PHYSICS),
                "strand::Cells".to_string(),
                "strand::Motion".to_string(),
                "concept::Force".to_string(),
                "concept::Energy".to_string(),
                "concept::Cell Wall".to_string(),
            ]
        );
    }

    #[test]
    fn test_node_styles() {
        let graph = GraphBuilder::with_defaults().build(&sample_dataset());

        let domain = graph.node(&NodeId::domain(PHYSICS)).unwrap();
        assert_eq!(domain.shape, NodeShape::Box);
        assert_eq!(domain.size, 60);
        assert_eq!(domain.color, "#2563EB");
        assert_eq!(domain.label, "Physics\n(The Physical World)");
        assert_eq!(domain.font, Some(NodeFont::new(18, "white")));

        let strand = graph.node(&NodeId::strand("Motion")).unwrap();
        assert_eq!(strand.shape, NodeShape::Ellipse);
        assert_eq!(strand.size, 35);
        assert_eq!(strand.color, "#9CA3AF");

        let concept = graph.node(&NodeId::concept("Cell Wall")).unwrap();
        assert_eq!(concept.shape, NodeShape::Dot);
        assert_eq!(concept.size, 22);
        assert_eq!(concept.color, "#EA580C");
        assert_eq!(concept.border_color.as_deref(), Some("#111827"));
    }

    #[test]
    fn test_unknown_domain_uses_fallback_color() {
        let dataset = Dataset::new(vec![ConceptRecord::new("Astrology", "Signs", "Aries")], Vec::new());
        let graph = GraphBuilder::with_defaults().build(&dataset);

        assert_eq!(graph.node(&NodeId::domain("Astrology")).unwrap().color, "#64748B");
        assert_eq!(graph.node(&NodeId::concept("Aries")).unwrap().color, "#64748B");
    }

    #[test]
    fn test_border_emphasis() {
        let graph = GraphBuilder::with_defaults().build(&sample_dataset());

        let force = graph.node(&NodeId::concept("Force")).unwrap();
        let energy = graph.node(&NodeId::concept("Energy")).unwrap();
        assert_eq!(force.border_width, Some(3));
        assert_eq!(energy.border_width, Some(1));
    }

    #[test]
    fn test_dangling_interconnection_dropped() {
        let graph = GraphBuilder::with_defaults().build(&sample_dataset());

        let osmosis = NodeId::concept("Osmosis");
        assert!(!graph.has_node(&osmosis));
        assert!(!graph.edges().iter().any(|e| e.touches(&osmosis)));
        assert_eq!(graph.edges_of_kind(EdgeKind::Interconnection).count(), 1);
    }

    #[test]
    fn test_edge_order_and_colors() {
        let dataset = Dataset::new(
            vec![ConceptRecord::new(PHYSICS, "Motion", "Force").with_interconnection("Force")],
            Vec::new(),
        );
        let graph = GraphBuilder::with_defaults().build(&dataset);

        let edges = graph.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].source, NodeId::domain(PHYSICS));
        assert_eq!(edges[0].target, NodeId::strand("Motion"));
        assert_eq!(edges[0].color, "#CBD5E1");
        assert_eq!(edges[1].source, NodeId::strand("Motion"));
        assert_eq!(edges[1].target, NodeId::concept("Force"));
        assert_eq!(edges[2].kind, EdgeKind::Interconnection);
        assert_eq!(edges[2].target, NodeId::concept("Force"));
        assert_eq!(edges[2].color, "#FCA5A5");
    }

    #[test]
    fn test_duplicate_concept_name_first_seen_wins() {
        let dataset = Dataset::new(
            vec![
                ConceptRecord::new(PHYSICS, "Motion", "Pressure"),
                ConceptRecord::new(BIOLOGY, "Plants", "Pressure"),
            ],
            Vec::new(),
        );
        let graph = GraphBuilder::with_defaults().build(&dataset);

        let concepts: Vec<_> = graph
            .nodes()
            .iter()
            .filter(|n| n.id.concept_name().is_some())
            .collect();
        assert_eq!(concepts.len(), 1);
        assert_eq!(concepts[0].color, "#2563EB");
        // Each record still contributes its own hierarchy pair.
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_empty_dataset() {
        let graph = GraphBuilder::with_defaults().build(&Dataset::default());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_custom_style() {
        let style = GraphStyle {
            concept_size: 30,
            interconnection_edge_color: "#000000".to_string(),
            ..GraphStyle::default()
        };
        let graph = GraphBuilder::new(style).build(&sample_dataset());

        assert_eq!(graph.node(&NodeId::concept("Force")).unwrap().size, 30);
        let link = graph.edges_of_kind(EdgeKind::Interconnection).next().unwrap();
        assert_eq!(link.color, "#000000");
    }
}
