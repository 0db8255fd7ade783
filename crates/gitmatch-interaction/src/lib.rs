//! Inference-service collaborators for the GitMatch pipeline.
//!
//! Currently a single implementation: the Gemini REST API synthesizer
//! producing the structured skill analysis.

pub mod gemini_synthesizer;

pub use crate::gemini_synthesizer::GeminiSynthesizer;
