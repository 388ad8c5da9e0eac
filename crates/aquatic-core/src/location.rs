//! Lazily-resolved world locations.
//!
//! A [`LazyLocation`] names its world by string instead of holding a live
//! world handle, so it can be stored, serialized, and resolved later by the
//! host. The string form is semicolon-separated:
//! `world;x;y;z` or `world;x;y;z;yaw;pitch`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A world-name-keyed location with optional view rotation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LazyLocation {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
}

impl LazyLocation {
    /// Create a location with zero rotation
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self::with_rotation(world, x, y, z, 0.0, 0.0)
    }

    /// Create a location with explicit yaw and pitch
    pub fn with_rotation(
        world: impl Into<String>,
        x: f64,
        y: f64,
        z: f64,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
            yaw,
            pitch,
        }
    }

    /// The 4-field string form, dropping yaw and pitch.
    #[must_use]
    pub fn to_string_simple(&self) -> String {
        format!("{};{};{};{}", self.world, self.x, self.y, self.z)
    }

    /// Yaw and pitch in degrees that face `target` from this location.
    ///
    /// Yaw 0 looks toward positive Z; negative pitch looks upward.
    #[must_use]
    pub fn look_at(&self, target: &Self) -> (f32, f32) {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        let dz = target.z - self.z;

        let dist_xz = (dx * dx + dz * dz).sqrt();

        let yaw = (-dx).atan2(dz).to_degrees() as f32;
        let pitch = (-dy).atan2(dist_xz).to_degrees() as f32;

        (yaw, pitch)
    }
}

impl fmt::Display for LazyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{};{};{}",
            self.world, self.x, self.y, self.z, self.yaw, self.pitch
        )
    }
}

impl FromStr for LazyLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::InvalidLocation(s.to_string());

        let parts: Vec<&str> = s.split(';').collect();
        if parts.len() != 4 && parts.len() != 6 {
            return Err(err());
        }

        let x = parts[1].parse().map_err(|_| err())?;
        let y = parts[2].parse().map_err(|_| err())?;
        let z = parts[3].parse().map_err(|_| err())?;

        let (yaw, pitch) = if parts.len() == 6 {
            (
                parts[4].parse().map_err(|_| err())?,
                parts[5].parse().map_err(|_| err())?,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self::with_rotation(parts[0], x, y, z, yaw, pitch))
    }
}
