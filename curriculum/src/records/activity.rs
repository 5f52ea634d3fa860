//! Activity records - learning exercises attached to a concept.

use serde::{Deserialize, Serialize};

use super::default_on_null;

/// A learning exercise attached to exactly one concept via `parent_concept`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActivityRecord {
    #[serde(default)]
    pub activity_name: Option<String>,

    #[serde(default, deserialize_with = "default_on_null")]
    pub activity_type: String,

    #[serde(default, deserialize_with = "default_on_null")]
    pub learning_goal: String,

    /// Foreign key into `ConceptRecord::concept_name`.
    #[serde(default)]
    pub parent_concept: Option<String>,
}

impl ActivityRecord {
    /// Create a named activity attached to a concept.
    pub fn new(activity_name: impl Into<String>, parent_concept: impl Into<String>) -> Self {
        Self {
            activity_name: Some(activity_name.into()),
            parent_concept: Some(parent_concept.into()),
            ..Self::default()
        }
    }

    /// Set the activity type.
    pub fn with_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = activity_type.into();
        self
    }

    /// Set the learning goal.
    pub fn with_goal(mut self, learning_goal: impl Into<String>) -> Self {
        self.learning_goal = learning_goal.into();
        self
    }

    /// Check whether this activity belongs to the named concept.
    pub fn belongs_to(&self, concept_name: &str) -> bool {
        self.parent_concept.as_deref() == Some(concept_name)
    }
}
