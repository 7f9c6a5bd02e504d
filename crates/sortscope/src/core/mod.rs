//! Core types shared by the recorder, playback and renderers
//!
//! Everything here is independent of any UI: plain data, validation and the
//! logging setup.

pub mod canvas;
mod error;
mod input;
pub mod logging;
mod types;

pub use canvas::*;
pub use error::*;
pub use input::*;
pub use logging::*;
pub use types::*;
