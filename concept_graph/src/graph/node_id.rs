//! Node identifiers - namespaced string keys for graph nodes.

use serde::Serialize;

pub const DOMAIN_PREFIX: &str = "domain::";
pub const STRAND_PREFIX: &str = "strand::";
pub const CONCEPT_PREFIX: &str = "concept::";

/// Identity of a graph node.
///
/// The string form is a namespace prefix followed by the natural key, e.g.
/// `concept::Force`. Renderers hand these strings back in click events, so
/// the format must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub enum NodeId {
    Domain(String),
    Strand(String),
    Concept(String),
}

impl NodeId {
    /// Create a domain node id.
    pub fn domain(name: impl Into<String>) -> Self {
        NodeId::Domain(name.into())
    }

    /// Create a strand node id.
    pub fn strand(name: impl Into<String>) -> Self {
        NodeId::Strand(name.into())
    }

    /// Create a concept node id.
    pub fn concept(name: impl Into<String>) -> Self {
        NodeId::Concept(name.into())
    }

    /// Parse a raw identifier. Strings without a known prefix yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(name) = raw.strip_prefix(DOMAIN_PREFIX) {
            Some(NodeId::domain(name))
        } else if let Some(name) = raw.strip_prefix(STRAND_PREFIX) {
            Some(NodeId::strand(name))
        } else {
            raw.strip_prefix(CONCEPT_PREFIX).map(NodeId::concept)
        }
    }

    /// The natural key without its prefix.
    pub fn name(&self) -> &str {
        match self {
            NodeId::Domain(s) | NodeId::Strand(s) | NodeId::Concept(s) => s,
        }
    }

    /// The concept name, if this is a concept node.
    pub fn concept_name(&self) -> Option<&str> {
        match self {
            NodeId::Concept(s) => Some(s),
            _ => None,
        }
    }

    /// The namespace prefix for this id.
    pub fn prefix(&self) -> &'static str {
        match self {
            NodeId::Domain(_) => DOMAIN_PREFIX,
            NodeId::Strand(_) => STRAND_PREFIX,
            NodeId::Concept(_) => CONCEPT_PREFIX,
        }
    }

    /// Convert the id to its string form.
    pub fn as_string(&self) -> String {
        format!("{}{}", self.prefix(), self.name())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.prefix(), self.name())
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.as_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_string() {
        assert_eq!(
            NodeId::domain("Earth & Space Science").as_string(),
            "domain::Earth & Space Science"
        );
        assert_eq!(NodeId::strand("Motion").as_string(), "strand::Motion");
        assert_eq!(NodeId::concept("Force").to_string(), "concept::Force");
    }

    #[test]
    fn test_parse() {
        assert_eq!(NodeId::parse("domain::Physics"), Some(NodeId::domain("Physics")));
        assert_eq!(NodeId::parse("strand::Motion"), Some(NodeId::strand("Motion")));
        assert_eq!(NodeId::parse("concept::Force"), Some(NodeId::concept("Force")));
        assert_eq!(NodeId::parse("Force"), None);
        assert_eq!(NodeId::parse(""), None);
        assert_eq!(NodeId::parse("concept:Force"), None);
    }

    #[test]
    fn test_parse_keeps_separator_inside_name() {
        let id = NodeId::parse("concept::Ratio::Proportion").unwrap();
        assert_eq!(id.concept_name(), Some("Ratio::Proportion"));
    }

    #[test]
    fn test_namespaces_do_not_collide() {
        let domain = NodeId::domain("Light");
        let strand = NodeId::strand("Light");
        let concept = NodeId::concept("Light");

        assert_ne!(domain.as_string(), strand.as_string());
        assert_ne!(strand.as_string(), concept.as_string());
        assert_eq!(domain.name(), concept.name());
        assert!(domain.concept_name().is_none());
        assert!(strand.concept_name().is_none());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&NodeId::concept("Force")).unwrap();
        assert_eq!(json, "\"concept::Force\"");
    }
}
