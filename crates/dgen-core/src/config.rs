//! Generation parameters and configuration file loading
//!
//! A config file holds `OPTIONS=` lines of comma separated `name:value`
//! pairs; `#` starts a comment line:
//!
//! ```text
//! # small cramped dungeon
//! OPTIONS=rooms:12,radius:24
//! OPTIONS=max_attempts:2000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GenerationError;

/// Smallest radius picked automatically for a given room count
pub const MIN_AUTO_RADIUS: i32 = 20;

/// Largest accepted radius; A* allocates `radius²` nodes per tunnel
pub const MAX_RADIUS: i32 = 1024;

/// Default per-room bound on placement candidates
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Parameters for one dungeon generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Number of rooms to place
    pub room_count: usize,
    /// Radius of the placement disk and side of the pathfinding grid
    pub radius: i32,
    /// Candidates tried per room before giving up
    pub max_placement_attempts: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self::for_room_count(10)
    }
}

/// Config file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("option '{0}' needs a value")]
    MissingValue(String),
}

impl DungeonConfig {
    /// Config for `room_count` rooms with the radius grown to fit them:
    /// the room count itself once it reaches [`MIN_AUTO_RADIUS`], otherwise
    /// `MIN_AUTO_RADIUS`.
    pub fn for_room_count(room_count: usize) -> Self {
        let radius = i32::try_from(room_count)
            .unwrap_or(i32::MAX)
            .max(MIN_AUTO_RADIUS);
        Self {
            room_count,
            radius,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn with_radius(mut self, radius: i32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_max_placement_attempts(mut self, attempts: u32) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Reject parameters no stage can work with
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.room_count == 0 {
            return Err(GenerationError::invalid("room_count", self.room_count));
        }
        if self.radius <= 0 || self.radius > MAX_RADIUS {
            return Err(GenerationError::invalid("radius", self.radius));
        }
        if self.max_placement_attempts == 0 {
            return Err(GenerationError::invalid(
                "max_placement_attempts",
                self.max_placement_attempts,
            ));
        }
        Ok(())
    }

    /// Load a config file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse config file contents
    ///
    /// A room count without an explicit radius gets the automatic radius of
    /// [`DungeonConfig::for_room_count`].
    pub fn parse_config(contents: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut radius = None;

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    config.set_option(opt, &mut radius)?;
                }
            } else {
                return Err(ConfigError::UnknownOption(line.to_string()));
            }
        }

        if let Some(radius) = radius {
            config.radius = radius;
        } else {
            config.radius = Self::for_room_count(config.room_count).radius;
        }
        Ok(config)
    }

    fn set_option(&mut self, opt: &str, radius: &mut Option<i32>) -> Result<(), ConfigError> {
        let (name, value) = opt
            .split_once(':')
            .or_else(|| opt.split_once('='))
            .map(|(n, v)| (n.trim(), v.trim()))
            .ok_or_else(|| ConfigError::MissingValue(opt.to_string()))?;

        let invalid = || ConfigError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "rooms" | "room_count" => self.room_count = value.parse().map_err(|_| invalid())?,
            "radius" => *radius = Some(value.parse().map_err(|_| invalid())?),
            "max_attempts" | "max_placement_attempts" => {
                self.max_placement_attempts = value.parse().map_err(|_| invalid())?;
            }
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Render as config file contents
    pub fn to_config_string(&self) -> String {
        format!(
            "OPTIONS=rooms:{},radius:{},max_attempts:{}\n",
            self.room_count, self.radius, self.max_placement_attempts
        )
    }
}
