//! Concept records - the leaves of the domain/strand/concept hierarchy.

use serde::{Deserialize, Serialize};

use super::default_on_null;

/// A named, gradable unit of knowledge.
///
/// `domain`, `strand` and `concept_name` are mandatory; a document missing
/// any of them fails to deserialize. Everything else defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRecord {
    pub domain: String,
    pub strand: String,
    /// Unique key within a dataset.
    pub concept_name: String,

    #[serde(default)]
    pub brief_explanation: Option<String>,

    #[serde(default, deserialize_with = "default_on_null")]
    pub chapter_references: Vec<String>,

    #[serde(default)]
    pub concept_type: Option<String>,

    #[serde(default)]
    pub cognitive_level: Option<String>,

    /// Names of other concepts in the same dataset.
    /// Names with no matching concept are dropped when the graph is built.
    #[serde(default, deserialize_with = "default_on_null")]
    pub interconnections: Vec<String>,
}

impl ConceptRecord {
    /// Create a concept with only its mandatory fields set.
    pub fn new(
        domain: impl Into<String>,
        strand: impl Into<String>,
        concept_name: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            strand: strand.into(),
            concept_name: concept_name.into(),
            brief_explanation: None,
            chapter_references: Vec::new(),
            concept_type: None,
            cognitive_level: None,
            interconnections: Vec::new(),
        }
    }

    /// Set the brief explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.brief_explanation = Some(explanation.into());
        self
    }

    /// Add a chapter reference.
    pub fn with_chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapter_references.push(chapter.into());
        self
    }

    /// Set the concept type.
    pub fn with_type(mut self, concept_type: impl Into<String>) -> Self {
        self.concept_type = Some(concept_type.into());
        self
    }

    /// Set the cognitive level.
    pub fn with_cognitive_level(mut self, level: impl Into<String>) -> Self {
        self.cognitive_level = Some(level.into());
        self
    }

    /// Declare a cross-reference to another concept.
    pub fn with_interconnection(mut self, concept_name: impl Into<String>) -> Self {
        self.interconnections.push(concept_name.into());
        self
    }
}
