//! Datasets - one knowledge base document per grade.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::config::DataPaths;
use crate::error::{CurriculumError, Result};
use crate::records::{default_on_null, ActivityRecord, ConceptRecord};

/// Grade levels with a knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    #[default]
    Seven,
    Eight,
}

impl Grade {
    /// Both grades, in selector order.
    pub const ALL: [Grade; 2] = [Grade::Seven, Grade::Eight];

    /// The grade as a number.
    pub fn number(&self) -> u8 {
        match self {
            Grade::Seven => 7,
            Grade::Eight => 8,
        }
    }
}

impl TryFrom<u8> for Grade {
    type Error = CurriculumError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            7 => Ok(Grade::Seven),
            8 => Ok(Grade::Eight),
            other => Err(CurriculumError::UnknownGrade(other)),
        }
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.number()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The concepts and activities of a single grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Dataset {
    /// Unique by `concept_name`. Not enforced; lookups take the first match.
    pub concepts: Vec<ConceptRecord>,

    #[serde(default, deserialize_with = "default_on_null")]
    pub activities: Vec<ActivityRecord>,
}

impl Dataset {
    /// Create a dataset from records.
    pub fn new(concepts: Vec<ConceptRecord>, activities: Vec<ActivityRecord>) -> Self {
        Self {
            concepts,
            activities,
        }
    }

    /// Parse a dataset document.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read and parse a dataset document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CurriculumError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&text).map_err(|source| CurriculumError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            concepts = dataset.concepts.len(),
            activities = dataset.activities.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// The set of all concept names in this dataset.
    pub fn concept_names(&self) -> HashSet<&str> {
        self.concepts.iter().map(|c| c.concept_name.as_str()).collect()
    }

    /// Find a concept by exact name. With duplicate names the first one wins.
    pub fn find_concept(&self, concept_name: &str) -> Option<&ConceptRecord> {
        self.concepts.iter().find(|c| c.concept_name == concept_name)
    }

    /// Check whether at least one activity is attached to the named concept.
    pub fn has_activities(&self, concept_name: &str) -> bool {
        self.activities.iter().any(|a| a.belongs_to(concept_name))
    }
}

/// Datasets for every grade, loaded together at startup.
///
/// Selecting a grade swaps the whole dataset; grades are never merged.
#[derive(Debug, Clone, Default)]
pub struct GradeCatalog {
    grade7: Dataset,
    grade8: Dataset,
}

impl GradeCatalog {
    /// Build a catalog from already-loaded datasets.
    pub fn new(grade7: Dataset, grade8: Dataset) -> Self {
        Self { grade7, grade8 }
    }

    /// Load both grade documents. Either one failing fails the whole load.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        Ok(Self {
            grade7: Dataset::load(&paths.grade7)?,
            grade8: Dataset::load(&paths.grade8)?,
        })
    }

    /// The dataset for a grade.
    pub fn dataset(&self, grade: Grade) -> &Dataset {
        match grade {
            Grade::Seven => &self.grade7,
            Grade::Eight => &self.grade8,
        }
    }
}
