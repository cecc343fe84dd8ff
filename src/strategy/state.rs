//! Engine state and per-tick domain types
//!
//! Fragments and visible objects are rebuilt from every snapshot; only
//! `EngineState` survives between ticks.

use std::fmt;

use glam::DVec2;

use super::quadrant::Quadrant;

/// What the bot is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    None,
    MoveToPoint,
    MoveToFood,
    MoveToPlayer,
    MoveFromPlayer,
    MoveFromVirus,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::None => "none",
            Action::MoveToPoint => "mtpoint",
            Action::MoveToFood => "mtfood",
            Action::MoveToPlayer => "mtpplayer",
            Action::MoveFromPlayer => "mfpplayer",
            Action::MoveFromVirus => "mfvirus",
        }
    }

    /// Calm actions may be replaced by food seeking
    pub fn is_calm(&self) -> bool {
        matches!(self, Action::None | Action::MoveToPoint | Action::MoveToFood)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visible object type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Food,
    Player,
    Virus,
    Ejection,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Food => "F",
            ObjectKind::Player => "P",
            ObjectKind::Virus => "V",
            ObjectKind::Ejection => "E",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "F" => Some(ObjectKind::Food),
            "P" => Some(ObjectKind::Player),
            "V" => Some(ObjectKind::Virus),
            "E" => Some(ObjectKind::Ejection),
            _ => None,
        }
    }
}

/// One of our own body pieces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFragment {
    pub mass: f64,
    pub radius: f64,
    pub pos: DVec2,
}

impl BodyFragment {
    pub fn new(mass: f64, radius: f64, x: f64, y: f64) -> Self {
        Self {
            mass,
            radius,
            pos: DVec2::new(x, y),
        }
    }
}

/// Something we can see this tick
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleObject {
    pub id: String,
    pub kind: ObjectKind,
    pub mass: f64,
    pub radius: f64,
    pub pos: DVec2,
}

impl VisibleObject {
    pub fn new(id: impl Into<String>, kind: ObjectKind, mass: f64, radius: f64, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            mass,
            radius,
            pos: DVec2::new(x, y),
        }
    }
}

/// World dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    pub width: f64,
    pub height: f64,
}

impl MapConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn half(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Decision state carried across ticks
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub current_action: Action,
    /// Rival or virus currently chased or evaded
    pub target_id: Option<String>,
    pub next_aim: DVec2,
    pub tick: u64,
    pub next_reset_tick: Option<u64>,
    /// Last seen world size (refreshed on every live tick)
    pub map: Option<MapConfig>,
}

impl EngineState {
    /// An interval of 0 disables the reset schedule
    pub fn new(reset_action_interval: Option<u64>) -> Self {
        Self {
            current_action: Action::None,
            target_id: None,
            next_aim: DVec2::ZERO,
            tick: 0,
            next_reset_tick: reset_action_interval.filter(|n| *n > 0),
            map: None,
        }
    }

    /// True when `id` differs from the remembered target
    pub fn is_new_target(&self, id: &str) -> bool {
        self.target_id.as_deref() != Some(id)
    }

    pub fn aim_at_quadrant(&mut self, quadrant: Quadrant, map: &MapConfig) {
        self.next_aim = quadrant.center(map);
    }
}

/// Output for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Move { target: DVec2, split: bool },
    /// We have no fragments left
    Died,
}
