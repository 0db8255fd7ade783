//! Session step sum type.

pub mod model;

pub use model::SessionStep;
