//! Domain palette - the fixed set of curriculum domains and their colors.

use serde::{Deserialize, Serialize};

/// Color used for any domain outside the known set.
pub const FALLBACK_DOMAIN_COLOR: &str = "#64748B";

/// Top-level subject areas of the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Physics,
    Chemistry,
    Biology,
    EarthAndSpace,
    ScientificInquiry,
}

impl Domain {
    /// Every known domain, in palette order.
    pub const ALL: [Domain; 5] = [
        Domain::Physics,
        Domain::Chemistry,
        Domain::Biology,
        Domain::EarthAndSpace,
        Domain::ScientificInquiry,
    ];

    /// Match a domain by its exact display name as written in the knowledge base.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.display_name() == name)
    }

    /// The name used for this domain in dataset documents.
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Physics => "Physics (The Physical World)",
            Domain::Chemistry => "Chemistry (The World of Matter)",
            Domain::Biology => "Biology (The Living World)",
            Domain::EarthAndSpace => "Earth & Space Science",
            Domain::ScientificInquiry => "Scientific Inquiry & Investigative Process",
        }
    }

    /// Hex color for nodes in this domain.
    pub fn color(&self) -> &'static str {
        match self {
            Domain::Physics => "#2563EB",
            Domain::Chemistry => "#16A34A",
            Domain::Biology => "#EA580C",
            Domain::EarthAndSpace => "#7C3AED",
            Domain::ScientificInquiry => "#6B7280",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Look up the color for a raw domain name, falling back to neutral gray.
pub fn domain_color(name: &str) -> &'static str {
    Domain::from_name(name)
        .map(|d| d.color())
        .unwrap_or(FALLBACK_DOMAIN_COLOR)
}
