//! Application re-exports

pub use crate::frontend::MaskVizApp;
