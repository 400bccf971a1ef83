//! UI sync layer: a pure projection of the current step onto the info
//! panel, and its HTML rendering.

mod html;
mod panel;

pub use html::escape;
pub use panel::{PanelRow, PanelView};
