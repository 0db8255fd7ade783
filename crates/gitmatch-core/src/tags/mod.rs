//! Tag pools, the active selection, and the refinement state machine.

pub mod model;
pub mod refinement;

pub use model::TagSet;
pub use refinement::{RefinementState, TagRefinement};
