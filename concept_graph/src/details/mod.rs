//! Details panel - the view model shown beside the graph for the selected concept.

use curriculum::{ActivityRecord, ConceptRecord};
use serde::{Deserialize, Serialize};

use crate::lookup::related_activities;

/// Shown when no concept is selected.
pub const NO_SELECTION_HINT: &str = "Click a concept node to view details.";

/// Stand-in for a missing type or cognitive level.
pub const MISSING_FIELD: &str = "-";

/// Title used for activities without a name.
pub const UNNAMED_ACTIVITY: &str = "Activity";

/// One expandable activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub title: String,
    pub activity_type: String,
    pub learning_goal: String,
}

impl From<&ActivityRecord> for ActivityEntry {
    fn from(activity: &ActivityRecord) -> Self {
        Self {
            title: activity
                .activity_name
                .clone()
                .unwrap_or_else(|| UNNAMED_ACTIVITY.to_string()),
            activity_type: activity.activity_type.clone(),
            learning_goal: activity.learning_goal.clone(),
        }
    }
}

/// Everything the panel displays for one concept, with placeholders filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptDetails {
    pub title: String,
    pub explanation: String,
    /// Chapter references joined by `", "`.
    pub chapters: String,
    pub concept_type: String,
    pub cognitive_level: String,
    pub activities: Vec<ActivityEntry>,
}

impl ConceptDetails {
    /// Build the panel contents for a concept and its related activities.
    pub fn from_record(concept: &ConceptRecord, activities: &[ActivityRecord]) -> Self {
        Self {
            title: concept.concept_name.clone(),
            explanation: concept.brief_explanation.clone().unwrap_or_default(),
            chapters: concept.chapter_references.join(", "),
            concept_type: concept
                .concept_type
                .clone()
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            cognitive_level: concept
                .cognitive_level
                .clone()
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            activities: related_activities(&concept.concept_name, activities)
                .into_iter()
                .map(ActivityEntry::from)
                .collect(),
        }
    }

    /// Format the details as plain text.
    pub fn render_text(&self) -> String {
        let mut text = String::new();

        text.push_str(&format!("### {}\n", self.title));
        if !self.explanation.is_empty() {
            text.push_str(&self.explanation);
            text.push('\n');
        }
        text.push_str(&format!("Chapter: {}\n", self.chapters));
        text.push_str(&format!("Type: {}\n", self.concept_type));
        text.push_str(&format!("Cognitive Level: {}\n", self.cognitive_level));

        if !self.activities.is_empty() {
            text.push_str("\n### Activities\n");
            for entry in &self.activities {
                text.push_str(&format!("- {}\n", entry.title));
                text.push_str(&format!("    {}\n", entry.activity_type));
                text.push_str(&format!("    {}\n", entry.learning_goal));
            }
        }

        text
    }
}

/// The panel state: either a hint or a concept's details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailsPanel {
    Empty,
    Concept(ConceptDetails),
}

impl DetailsPanel {
    /// Format the panel as plain text, header included.
    pub fn render_text(&self) -> String {
        let mut text = String::from("## Concept Details\n");
        match self {
            DetailsPanel::Empty => {
                text.push_str(NO_SELECTION_HINT);
                text.push('\n');
            }
            DetailsPanel::Concept(details) => text.push_str(&details.render_text()),
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn force() -> ConceptRecord {
        ConceptRecord::new("Physics (The Physical World)", "Motion", "Force")
            .with_explanation("A push or a pull.")
            .with_chapter("Ch 8")
            .with_chapter("Ch 11")
            .with_type("Foundational")
            .with_cognitive_level("Understand")
    }

    #[test]
    fn test_from_full_record() {
        let activities = vec![
            ActivityRecord::new("Push the cart", "Force")
                .with_type("Hands-on")
                .with_goal("Feel a force"),
            ActivityRecord::new("Bounce", "Energy"),
        ];

        let details = ConceptDetails::from_record(&force(), &activities);

        assert_eq!(details.title, "Force");
        assert_eq!(details.explanation, "A push or a pull.");
        assert_eq!(details.chapters, "Ch 8, Ch 11");
        assert_eq!(details.concept_type, "Foundational");
        assert_eq!(details.cognitive_level, "Understand");
        assert_eq!(
            details.activities,
            vec![ActivityEntry {
                title: "Push the cart".to_string(),
                activity_type: "Hands-on".to_string(),
                learning_goal: "Feel a force".to_string(),
            }]
        );
    }

    #[test]
    fn test_placeholders() {
        let concept = ConceptRecord::new("D", "S", "Bare");
        let orphan = ActivityRecord {
            parent_concept: Some("Bare".to_string()),
            ..ActivityRecord::default()
        };

        let details = ConceptDetails::from_record(&concept, &[orphan]);

        assert_eq!(details.explanation, "");
        assert_eq!(details.chapters, "");
        assert_eq!(details.concept_type, MISSING_FIELD);
        assert_eq!(details.cognitive_level, MISSING_FIELD);
        assert_eq!(details.activities[0].title, UNNAMED_ACTIVITY);
    }

    #[test]
    fn test_render_text() {
        let activities = vec![ActivityRecord::new("Push the cart", "Force").with_type("Hands-on")];
        let text = ConceptDetails::from_record(&force(), &activities).render_text();

        assert!(text.starts_with("### Force\nA push or a pull.\n"));
        assert!(text.contains("Chapter: Ch 8, Ch 11\n"));
        assert!(text.contains("Cognitive Level: Understand\n"));
        assert!(text.contains("### Activities\n- Push the cart\n    Hands-on\n"));
    }

    #[test]
    fn test_render_text_without_activities() {
        let text = ConceptDetails::from_record(&force(), &[]).render_text();
        assert!(!text.contains("Activities"));
    }

    #[test]
    fn test_empty_panel() {
        let text = DetailsPanel::Empty.render_text();
        assert_eq!(text, format!("## Concept Details\n{}\n", NO_SELECTION_HINT));
    }
}
