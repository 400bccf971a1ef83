//! Step transitions: the timeline scheduler, its segment effects and the
//! busy-guarded step engine that drives them.

pub mod segments;
pub mod step_engine;
pub mod timeline;
pub mod transition;
pub mod vignette;
pub mod watchdog;

pub use step_engine::{StepEngine, StepEvent};
pub use timeline::{Segment, SegmentContext, SegmentEffect, Timeline};
pub use transition::{Transition, TransitionKind};
pub use vignette::Vignette;
