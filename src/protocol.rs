//! Wire records
//!
//! The server talks one JSON object per line. The first line is the world
//! config, every following line is a tick snapshot, and we answer each
//! snapshot with one command line.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StrategyError;
use crate::strategy::{BodyFragment, Command, MapConfig, ObjectKind, VisibleObject};

/// World config, sent once before the first tick
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WorldConfig {
    #[serde(rename = "GAME_WIDTH")]
    pub game_width: f64,
    #[serde(rename = "GAME_HEIGHT")]
    pub game_height: f64,
}

impl WorldConfig {
    pub fn map(&self) -> MapConfig {
        MapConfig::new(self.game_width, self.game_height)
    }
}

/// One of our fragments
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct FragmentRecord {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub m: f64,
}

/// A visible object; food and ejections carry only a position
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRecord {
    #[serde(rename = "T")]
    pub tag: String,
    #[serde(rename = "Id", default, deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "M", default)]
    pub m: f64,
    #[serde(rename = "R", default)]
    pub r: f64,
}

/// Per-tick snapshot
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TickRecord {
    #[serde(rename = "Mine", default)]
    pub mine: Vec<FragmentRecord>,
    #[serde(rename = "Objects", default)]
    pub objects: Vec<ObjectRecord>,
}

impl TickRecord {
    pub fn fragments(&self) -> Vec<BodyFragment> {
        self.mine
            .iter()
            .map(|f| BodyFragment::new(f.m, f.r, f.x, f.y))
            .collect()
    }

    /// Visible objects with a known type tag
    pub fn visible_objects(&self) -> Vec<VisibleObject> {
        self.objects
            .iter()
            .filter_map(|o| match ObjectKind::from_str(&o.tag) {
                Some(kind) => Some(VisibleObject::new(o.id.clone(), kind, o.m, o.r, o.x, o.y)),
                None => {
                    log::warn!("skipping object with unknown type tag {:?}", o.tag);
                    None
                }
            })
            .collect()
    }
}

/// Ids arrive as strings for players ("3.1") and as numbers elsewhere
fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Command line sent back to the server
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandRecord {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Split", skip_serializing_if = "Option::is_none")]
    pub split: Option<bool>,
    #[serde(rename = "Debug", skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl From<Command> for CommandRecord {
    fn from(command: Command) -> Self {
        match command {
            Command::Move { target, split } => Self {
                x: target.x,
                y: target.y,
                split: Some(split),
                debug: None,
            },
            Command::Died => Self {
                x: 0.0,
                y: 0.0,
                split: None,
                debug: Some("Died".to_string()),
            },
        }
    }
}

pub fn parse_world_config(line: &str) -> Result<WorldConfig, StrategyError> {
    Ok(serde_json::from_str(line.trim())?)
}

pub fn parse_tick(line: &str) -> Result<TickRecord, StrategyError> {
    Ok(serde_json::from_str(line.trim())?)
}

pub fn encode_command(command: Command) -> Result<String, StrategyError> {
    Ok(serde_json::to_string(&CommandRecord::from(command))?)
}
