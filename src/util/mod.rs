//! Shared utilities: time sources, frame pacing and easing curves.

pub mod clock;
pub mod easing;
pub mod frame_timing;
