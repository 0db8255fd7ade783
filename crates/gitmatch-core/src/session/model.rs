//! Session step domain model.

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::issue::ResultSet;
use crate::profile::Profile;

/// The single step value a matching session is in.
///
/// Modeled as a sum type rather than a bag of optional fields so invalid
/// combinations (a results step with no analysis, say) are unrepresentable
/// by construction. Exactly one step is active at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "lowercase")]
pub enum SessionStep {
    /// Nothing fetched yet, or the session was reset.
    Idle,
    /// The initial pipeline is running: profile, repositories, inference.
    Analyzing,
    /// A search round is in flight, seeded by a completed analysis.
    Searching { profile: Profile, analysis: Analysis },
    /// A settled round: the displayed result set plus its provenance.
    Results {
        profile: Profile,
        analysis: Analysis,
        issues: ResultSet,
    },
    /// A round failed; partial state was discarded.
    Error { message: String },
}

impl SessionStep {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Analyzing | Self::Searching { .. })
    }

    /// The current analysis, available once the initial pipeline has passed
    /// the inference step.
    pub fn analysis(&self) -> Option<&Analysis> {
        match self {
            Self::Searching { analysis, .. } | Self::Results { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    /// The displayed result set, when a round has settled.
    pub fn results(&self) -> Option<&ResultSet> {
        match self {
            Self::Results { issues, .. } => Some(issues),
            _ => None,
        }
    }

    /// The surfaced error message, when the session is in its error step.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_accessors() {
        let step = SessionStep::Idle;
        assert!(step.is_idle());
        assert!(!step.is_busy());
        assert!(step.analysis().is_none());
        assert!(step.results().is_none());

        let step = SessionStep::Error {
            message: "boom".to_string(),
        };
        assert_eq!(step.error_message(), Some("boom"));
    }

    #[test]
    fn test_serialized_step_tag() {
        let json = serde_json::to_value(&SessionStep::Analyzing).unwrap();
        assert_eq!(json["step"], "analyzing");
    }
}
