//! Core utilities shared by every layer: numerical safety checks and console logging.
//! Declared first in `lib.rs` so the exported macros are visible crate-wide.

#[macro_use]
pub mod utils;
