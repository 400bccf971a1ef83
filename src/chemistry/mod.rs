//! Reaction domain: the step index, the species it maps to, and the static
//! descriptive data shown alongside each step.

pub mod data;
pub mod species;
pub mod step;

pub use species::Species;
pub use step::Step;
