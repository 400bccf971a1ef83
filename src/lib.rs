// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Animated 3D explainer of how dietary nitrite becomes a nitrosamine.
//!
//! The explainer walks through four fixed steps (sodium nitrite, nitrous
//! acid, the nitrosonium ion, and an N-nitrosamine) and animates every
//! change between them: the outgoing molecule fades, a short reaction
//! vignette plays, and the incoming molecule scales in with a slight
//! overshoot while the camera pans to it.
//!
//! # Key entry points
//!
//! - [`NitrosoEngine`] - owns all state and runs one frame at a time
//! - [`animation::StepEngine`] - the busy-guarded step state machine with
//!   its watchdog
//! - [`scene::Scene`] - molecules, environment, camera and live effects
//! - [`ui::PanelView`] - pure projection of a step onto the info panel
//! - [`options::Options`] - TOML-backed runtime configuration
//!
//! # Architecture
//!
//! Everything is single-threaded and frame-driven. Input becomes an
//! [`ExplainerCommand`]; step commands start a [`animation::Transition`]
//! whose timeline is advanced from the engine's [`util::clock::Clock`]
//! every frame. Drawing is delegated to a [`SceneRenderer`] and happens on
//! every frame, whether or not a transition is running.

pub mod animation;
pub mod camera;
pub mod chemistry;
pub mod effects;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
pub mod ui;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use engine::command::ExplainerCommand;
pub use engine::{FrameView, InstanceRenderer, NitrosoEngine, SceneRenderer};
pub use error::NitrosoError;
