//! Viewer configuration - data file locations and renderer display settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::dataset::Grade;
use crate::error::{CurriculumError, Result};

/// Locations of the per-grade knowledge base documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub grade7: PathBuf,
    pub grade8: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            grade7: PathBuf::from("data/grade7_knowledge_base.json"),
            grade8: PathBuf::from("data/grade8_knowledge_base.json"),
        }
    }
}

impl DataPaths {
    /// The document path for a grade.
    pub fn for_grade(&self, grade: Grade) -> &Path {
        match grade {
            Grade::Seven => &self.grade7,
            Grade::Eight => &self.grade8,
        }
    }
}

/// Settings passed through to the rendering surface unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    pub directed: bool,
    /// Whether the renderer runs its physics simulation.
    pub physics: bool,
    pub hierarchical: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 700,
            directed: false,
            physics: true,
            hierarchical: false,
        }
    }
}

/// Top-level configuration, read from a TOML file.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Page title shown above the graph.
    pub title: String,

    /// Grade selected when a session starts.
    pub default_grade: Grade,

    pub data: DataPaths,

    pub display: DisplayConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "NCERT Knowledge Graph".to_string(),
            default_grade: Grade::Seven,
            data: DataPaths::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CurriculumError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| CurriculumError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?config, "loaded viewer config");
        Ok(config)
    }
}
