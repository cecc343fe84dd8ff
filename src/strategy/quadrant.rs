//! Map quadrants
//!
//! The map is cut into four quadrants at half width and half height:
//!
//! ```text
//!   I  | II
//!  ----+----
//!  III | IV
//! ```
//!
//! y grows downward, so I and II are the top half. A point exactly on a
//! half line belongs to the left/top side.

use std::fmt;

use glam::DVec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::MapConfig;
use crate::consts::{FAR_CENTER_FACTOR, NEAR_CENTER_FACTOR};
use crate::error::StrategyError;
use Quadrant::{First, Fourth, Second, Third};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::First,
        Quadrant::Second,
        Quadrant::Third,
        Quadrant::Fourth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::First => "I",
            Quadrant::Second => "II",
            Quadrant::Third => "III",
            Quadrant::Fourth => "IV",
        }
    }

    /// Point to steer at when heading for this quadrant
    pub fn center(&self, map: &MapConfig) -> DVec2 {
        let half = map.half();
        let (fx, fy) = match self {
            Quadrant::First => (NEAR_CENTER_FACTOR, NEAR_CENTER_FACTOR),
            Quadrant::Second => (FAR_CENTER_FACTOR, NEAR_CENTER_FACTOR),
            Quadrant::Third => (NEAR_CENTER_FACTOR, FAR_CENTER_FACTOR),
            Quadrant::Fourth => (FAR_CENTER_FACTOR, FAR_CENTER_FACTOR),
        };
        DVec2::new(half.x * fx, half.y * fy)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quadrant containing `pos`
pub fn quadrant_of(pos: DVec2, map: &MapConfig) -> Quadrant {
    let half = map.half();
    match (pos.x <= half.x, pos.y <= half.y) {
        (true, true) => Quadrant::First,
        (false, true) => Quadrant::Second,
        (true, false) => Quadrant::Third,
        (false, false) => Quadrant::Fourth,
    }
}

/// Pick a quadrant uniformly among those not equal to `current` and not in `except`
pub fn random_quadrant<R: Rng + ?Sized>(
    rng: &mut R,
    current: Quadrant,
    except: &[Quadrant],
) -> Result<Quadrant, StrategyError> {
    let candidates: Vec<Quadrant> = Quadrant::ALL
        .into_iter()
        .filter(|q| *q != current && !except.contains(q))
        .collect();

    candidates
        .choose(rng)
        .copied()
        .ok_or(StrategyError::NoQuadrantAvailable)
}

/// One "don't run this way" rule: when fleeing from `from` and the threat
/// lies strictly between `above` and `below` degrees, skip `exclude`.
struct FleeRule {
    from: Quadrant,
    above: f64,
    below: f64,
    exclude: Quadrant,
}

const fn rule(from: Quadrant, above: f64, below: f64, exclude: Quadrant) -> FleeRule {
    FleeRule {
        from,
        above,
        below,
        exclude,
    }
}

/// Hand-tuned table; bounds are exclusive, so 0/90/180/270 never match.
const FLEE_RULES: &[FleeRule] = &[
    rule(First, 0.0, 90.0, Second),
    rule(First, 60.0, 90.0, Fourth),
    rule(First, 90.0, 180.0, Fourth),
    rule(First, 120.0, 140.0, Second),
    rule(First, 160.0, 180.0, Third),
    rule(First, 180.0, 270.0, Third),
    rule(Second, 90.0, 180.0, Fourth),
    rule(Second, 160.0, 180.0, Third),
    rule(Second, 180.0, 270.0, Third),
    rule(Second, 250.0, 270.0, First),
    rule(Second, 180.0, 200.0, Fourth),
    rule(Second, 270.0, 360.0, First),
    rule(Third, 0.0, 90.0, Second),
    rule(Third, 0.0, 20.0, First),
    rule(Third, 60.0, 90.0, Fourth),
    rule(Third, 90.0, 110.0, Fourth),
    rule(Third, 270.0, 360.0, First),
    rule(Fourth, 0.0, 20.0, Second),
    rule(Fourth, 250.0, 270.0, Third),
    rule(Fourth, 270.0, 360.0, First),
    rule(Fourth, 270.0, 290.0, Third),
    rule(Fourth, 340.0, 360.0, Second),
];

/// Quadrants lying roughly toward a threat seen at `angle` from quadrant `from`
pub fn flee_exclusions(from: Quadrant, angle: f64) -> Vec<Quadrant> {
    let mut except = Vec::new();
    for r in FLEE_RULES {
        if r.from == from && angle > r.above && angle < r.below && !except.contains(&r.exclude) {
            except.push(r.exclude);
        }
    }
    except
}
