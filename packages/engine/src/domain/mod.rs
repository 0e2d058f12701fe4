//! Domain - what a run is made of: the box, the constants, the colors.

pub mod config;
pub mod container;
pub mod palette;

pub use config::SimulationConfig;
pub use container::{Container, BOX_HEIGHT, BOX_WIDTH};
pub use palette::{ColorTag, PALETTE};
