//! Profile analysis domain: the synthesized skill analysis and the
//! query synthesizer trait.

pub mod model;
pub mod synthesizer;

pub use model::Analysis;
pub use synthesizer::{QuerySynthesizer, SYNTHESIZER_REPO_CAP};
