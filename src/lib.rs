//! Agar Bot - decision engine for an agar-style arena bot
//!
//! Core modules:
//! - `strategy`: Per-tick policy (state machine, quadrant geometry, object search)
//! - `protocol`: Line-oriented JSON records exchanged with the game server
//! - `runner`: Blocking stdin/stdout driver loop
//! - `settings`: Runtime configuration
//! - `error`: Error types

pub mod error;
pub mod protocol;
pub mod runner;
pub mod settings;
pub mod strategy;

pub use error::StrategyError;
pub use settings::Settings;
pub use strategy::{Command, Strategy};

use glam::DVec2;

/// Strategy constants
pub mod consts {
    /// Radius margin required before chasing a rival
    pub const SAFE_ATTACK_RADIUS: f64 = 3.0;
    /// Mass above which the bot considers splitting
    pub const SPLIT_MASS: f64 = 140.0;
    /// Quadrant centers sit at these fractions of the half-width/half-height
    pub const NEAR_CENTER_FACTOR: f64 = 0.5;
    pub const FAR_CENTER_FACTOR: f64 = 1.5;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Angle in degrees [0, 360) of the vector from `center` to `point`.
///
/// Straight down (same x, smaller y) is 0°, straight up is 180°, and the
/// angle grows clockwise. A zero-length vector is 0° by convention.
pub fn angle_deg(center: DVec2, point: DVec2) -> f64 {
    let d = point - center;
    if d.x == 0.0 {
        return if d.y > 0.0 { 180.0 } else { 0.0 };
    }

    let a = (d.y / d.x).atan().to_degrees();
    // atan saturates to ±90° for near-vertical vectors
    let angle = if d.x > 0.0 { a + 90.0 } else { a + 270.0 };
    angle.rem_euclid(360.0)
}
