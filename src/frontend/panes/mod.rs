//! Chart pane implementations
//!
//! Each pane owns its own dataset fetch and render state and exposes a
//! `render(state, config, ui) -> Vec<AppAction>` function the tab viewer
//! dispatches to.

pub mod mask_preference;
pub mod scatter;
