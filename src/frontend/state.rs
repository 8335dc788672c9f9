//! Shared frontend state types
//!
//! Panes and the toolbar communicate upward through [`AppAction`] values
//! collected during the frame and applied by the app afterwards, keeping
//! render functions free of cross-pane mutation.

use crate::frontend::workspace::PaneKind;

/// Deferred actions emitted by the toolbar and panes
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Select a state by name in the mask-preference pane
    SelectState(String),
    /// Re-fetch the dataset for one pane
    Reload(PaneKind),
    /// Switch the UI theme
    SetDarkMode(bool),
}
