//! Physics System - capsule settling
//!
//! One fixed tick per call, no internal clock and no hidden state:
//! - Gravity and ambient damping act on every capsule each tick
//! - Walls clamp and reflect with restitution, the floor also bleeds vx
//! - Overlapping pairs are pushed apart and exchange normal velocity
//!
//! Explicit Euler with positional correction. Qualitatively stable for the
//! small populations it is used with; not energy conserving and not swept,
//! so a capsule faster than about one radius per tick can pass through
//! another capsule (walls are always clamped).
//!
//! Pairs get one relaxation pass per tick. Piles of a dozen or so capsules
//! come to rest; deeper piles (around 20 and up) never fully do. They keep
//! overlaps of most of a radius and a steady jitter of a few units per tick.
//! Capsules whose centers coincide exactly are never separated by each other.

mod collision;
mod energy;
mod forces;
mod pairs;
mod types;
mod update;

pub use collision::{contain, resolve_walls};
pub use energy::{is_settled, kinetic_energy, max_speed};
pub use forces::integrate;
pub use pairs::{max_overlap, resolve_pair, resolve_pairs, Contact};
pub use types::StepReport;
pub use update::step_particles;
