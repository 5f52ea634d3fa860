//! Viewer sessions - the grade and selection state behind one graph view.
//!
//! A session only ever changes in two ways:
//! 1. **Grade switch**: The active dataset is replaced and the selection cleared
//! 2. **Click**: A click that resolves to a concept replaces the selection;
//!    anything else leaves it as it was

use curriculum::{ConceptRecord, Dataset, DisplayConfig, Grade, GradeCatalog, ViewerConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::details::{ConceptDetails, DetailsPanel};
use crate::events::ClickEvent;
use crate::graph::{ConceptGraph, GraphBuilder};
use crate::lookup::resolve_click;

/// Per-viewer state: which grade is shown and which concept is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewerSession {
    grade: Grade,
    selected_concept: Option<String>,
}

impl ViewerSession {
    /// Start a session on a grade with nothing selected.
    pub fn new(grade: Grade) -> Self {
        Self {
            grade,
            selected_concept: None,
        }
    }

    /// The active grade.
    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Name of the selected concept, if any.
    pub fn selected_concept(&self) -> Option<&str> {
        self.selected_concept.as_deref()
    }

    /// Switch grades. Switching to a different grade clears the selection.
    ///
    /// Returns `true` if the grade changed.
    pub fn select_grade(&mut self, grade: Grade) -> bool {
        if self.grade == grade {
            return false;
        }
        info!(from = %self.grade, to = %grade, "switching grade");
        self.grade = grade;
        self.selected_concept = None;
        true
    }

    /// Apply a renderer click. Only the first clicked node is considered.
    ///
    /// Returns `true` if the selection changed.
    pub fn handle_click(&mut self, event: &ClickEvent, dataset: &Dataset) -> bool {
        match event.primary_node() {
            Some(node_id) => self.select_node(node_id, dataset),
            None => false,
        }
    }

    /// Select the concept behind a raw node id, if it resolves to one.
    ///
    /// Returns `true` if the selection changed.
    pub fn select_node(&mut self, node_id: &str, dataset: &Dataset) -> bool {
        let Some(record) = resolve_click(node_id, dataset) else {
            return false;
        };
        if self.selected_concept.as_deref() == Some(record.concept_name.as_str()) {
            return false;
        }
        self.selected_concept = Some(record.concept_name.clone());
        true
    }

    /// The selected concept's record in `dataset`, if it is still present.
    pub fn selected_record<'a>(&self, dataset: &'a Dataset) -> Option<&'a ConceptRecord> {
        self.selected_concept
            .as_deref()
            .and_then(|name| dataset.find_concept(name))
    }

    /// The details panel for the current selection.
    pub fn details(&self, dataset: &Dataset) -> DetailsPanel {
        match self.selected_record(dataset) {
            Some(record) => {
                DetailsPanel::Concept(ConceptDetails::from_record(record, &dataset.activities))
            }
            None => DetailsPanel::Empty,
        }
    }
}

/// A complete viewer: loaded grade datasets, a builder, and one session.
///
/// The graph is rebuilt from scratch for every request; nothing is cached
/// across grade switches.
#[derive(Debug, Clone)]
pub struct Viewer {
    catalog: GradeCatalog,
    builder: GraphBuilder,
    display: DisplayConfig,
    session: ViewerSession,
}

impl Viewer {
    /// Create a viewer over an already-loaded catalog.
    pub fn new(catalog: GradeCatalog, config: &ViewerConfig) -> Self {
        Self {
            catalog,
            builder: GraphBuilder::with_defaults(),
            display: config.display.clone(),
            session: ViewerSession::new(config.default_grade),
        }
    }

    /// Load both grade datasets named by the config.
    pub fn load(config: &ViewerConfig) -> curriculum::Result<Self> {
        let catalog = GradeCatalog::load(&config.data)?;
        Ok(Self::new(catalog, config))
    }

    /// Replace the graph builder.
    pub fn with_builder(mut self, builder: GraphBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// The current session state.
    pub fn session(&self) -> &ViewerSession {
        &self.session
    }

    /// Renderer display settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// The dataset for the active grade.
    pub fn dataset(&self) -> &Dataset {
        self.catalog.dataset(self.session.grade())
    }

    /// Build the graph for the active grade.
    pub fn graph(&self) -> ConceptGraph {
        self.builder.build(self.dataset())
    }

    /// Switch the active grade.
    pub fn select_grade(&mut self, grade: Grade) -> bool {
        self.session.select_grade(grade)
    }

    /// Apply a renderer click against the active dataset.
    pub fn click(&mut self, event: &ClickEvent) -> bool {
        let dataset = self.catalog.dataset(self.session.grade());
        self.session.handle_click(event, dataset)
    }

    /// The details panel for the current selection.
    pub fn details(&self) -> DetailsPanel {
        self.session.details(self.dataset())
    }
}
