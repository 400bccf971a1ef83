//! Orbit camera: projection math and the focus/distance controller that
//! step transitions pan between molecule anchors.

pub mod controller;
pub mod core;

pub use controller::CameraController;
pub use self::core::{Camera, Ray};
