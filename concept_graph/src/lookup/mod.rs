//! Lookups from graph interactions back to curriculum records.

use curriculum::{ActivityRecord, ConceptRecord, Dataset};
use tracing::debug;

use crate::graph::NodeId;

/// Resolve a clicked node identifier to its concept record.
///
/// Only `concept::` ids resolve. Domain, strand and unrecognised ids yield
/// `None`, as does a concept name missing from the dataset. If a name appears
/// more than once, the first record wins.
pub fn resolve_click<'a>(node_id: &str, dataset: &'a Dataset) -> Option<&'a ConceptRecord> {
    let id = NodeId::parse(node_id)?;
    let name = id.concept_name()?;
    let record = dataset.find_concept(name);

    debug!(node_id, resolved = record.is_some(), "resolved click");
    record
}

/// Activities attached to a concept, in their original order.
pub fn related_activities<'a>(
    concept_name: &str,
    activities: &'a [ActivityRecord],
) -> Vec<&'a ActivityRecord> {
    activities
        .iter()
        .filter(|a| a.belongs_to(concept_name))
        .collect()
}
