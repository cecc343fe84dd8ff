//! Decision engine
//!
//! All per-tick policy lives here. Nothing in this module does I/O apart
//! from trace logging, which never influences a decision.

pub mod quadrant;
pub mod search;
pub mod state;
pub mod tick;

pub use quadrant::{Quadrant, flee_exclusions, quadrant_of, random_quadrant};
pub use search::{find_object, representative_fragment};
pub use state::{Action, BodyFragment, Command, EngineState, MapConfig, ObjectKind, VisibleObject};
pub use tick::Strategy;
