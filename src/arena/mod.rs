//! Declarative arena description
//!
//! An arena is an ordered list of typed items plus an episode time limit and a
//! blackout schedule. Each item carries four independent attribute lists that
//! may have different lengths; see [`fields`] for how they are read.

pub mod fields;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TIME_LIMIT;
use crate::error::{ArenaError, Result};

pub use fields::Placement;

/// Arena-space vector (x/z on the 0..40 footprint, y up)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// 8-bit RGB record
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Item color in either of the two accepted shapes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Rgb(Rgb),
    Vector(Vector3),
}

impl Color {
    /// Channels in 0..=255 order r, g, b
    pub fn channels(&self) -> [f32; 3] {
        match self {
            Color::Rgb(c) => [c.r, c.g, c.b],
            Color::Vector(v) => [v.x, v.y, v.z],
        }
    }
}

/// Closed vocabulary of item type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Agent,
    GoodGoal,
    GoodGoalBounce,
    BadGoal,
    BadGoalBounce,
    GoodGoalMulti,
    GoodGoalMultiBounce,
    Wall,
    Ramp,
    CylinderTunnel,
    CylinderTunnelTransparent,
    DeathZone,
    HotZone,
    Cardbox1,
    Cardbox2,
    LObject,
    LObject2,
    UObject,
}

impl ItemKind {
    pub const ALL: [ItemKind; 18] = [
        ItemKind::Agent,
        ItemKind::GoodGoal,
        ItemKind::GoodGoalBounce,
        ItemKind::BadGoal,
        ItemKind::BadGoalBounce,
        ItemKind::GoodGoalMulti,
        ItemKind::GoodGoalMultiBounce,
        ItemKind::Wall,
        ItemKind::Ramp,
        ItemKind::CylinderTunnel,
        ItemKind::CylinderTunnelTransparent,
        ItemKind::DeathZone,
        ItemKind::HotZone,
        ItemKind::Cardbox1,
        ItemKind::Cardbox2,
        ItemKind::LObject,
        ItemKind::LObject2,
        ItemKind::UObject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Agent => "Agent",
            ItemKind::GoodGoal => "GoodGoal",
            ItemKind::GoodGoalBounce => "GoodGoalBounce",
            ItemKind::BadGoal => "BadGoal",
            ItemKind::BadGoalBounce => "BadGoalBounce",
            ItemKind::GoodGoalMulti => "GoodGoalMulti",
            ItemKind::GoodGoalMultiBounce => "GoodGoalMultiBounce",
            ItemKind::Wall => "Wall",
            ItemKind::Ramp => "Ramp",
            ItemKind::CylinderTunnel => "CylinderTunnel",
            ItemKind::CylinderTunnelTransparent => "CylinderTunnelTransparent",
            ItemKind::DeathZone => "DeathZone",
            ItemKind::HotZone => "HotZone",
            ItemKind::Cardbox1 => "Cardbox1",
            ItemKind::Cardbox2 => "Cardbox2",
            ItemKind::LObject => "LObject",
            ItemKind::LObject2 => "LObject2",
            ItemKind::UObject => "UObject",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self> {
        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ArenaError::UnknownItem { name: s.to_string() })
    }
}

/// One configuration entry: zero or more placements of a single type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Type tag, validated against [`ItemKind`] at placement time
    pub name: String,
    #[serde(default)]
    pub positions: Vec<Option<Vector3>>,
    /// Degrees clockwise from north
    #[serde(default)]
    pub rotations: Vec<Option<f32>>,
    #[serde(default)]
    pub sizes: Vec<Option<Vector3>>,
    #[serde(default)]
    pub colors: Vec<Option<Color>>,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            name: kind.as_str().to_string(),
            ..Default::default()
        }
    }

    pub fn kind(&self) -> Result<ItemKind> {
        self.name.parse()
    }

    pub fn with_position(mut self, pos: Vector3) -> Self {
        self.positions.push(Some(pos));
        self
    }

    pub fn with_rotation(mut self, deg: f32) -> Self {
        self.rotations.push(Some(deg));
        self
    }

    pub fn with_size(mut self, size: Vector3) -> Self {
        self.sizes.push(Some(size));
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.colors.push(Some(color));
        self
    }
}

fn default_time_limit() -> u32 {
    DEFAULT_TIME_LIMIT
}

/// A declarative scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Episode time limit in steps
    #[serde(default = "default_time_limit")]
    pub t: u32,
    /// Blackout boundaries (see [`crate::sim::blackout`])
    #[serde(default)]
    pub blackouts: Vec<i32>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            t: DEFAULT_TIME_LIMIT,
            blackouts: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl Arena {
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Check the parts of the arena that can be rejected before any placement
    pub fn validate(&self) -> Result<()> {
        crate::sim::blackout::validate(&self.blackouts)?;
        for item in &self.items {
            item.kind()?;
        }
        Ok(())
    }
}

/// A set of arenas, as loaded from a configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub arenas: Vec<Arena>,
}

impl ArenaConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        log::info!("Loaded arena configuration ({} arenas)", config.arenas.len());
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Reading arena configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn arena(&self, index: usize) -> Result<&Arena> {
        self.arenas.get(index).ok_or(ArenaError::ArenaIndex {
            index,
            count: self.arenas.len(),
        })
    }
}
