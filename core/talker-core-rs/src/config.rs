use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const DEFAULT_GREETING: &str = "Hello to everyone in ENPM 808X! ";
pub const DEFAULT_PARENT_FRAME: &str = "world";
pub const DEFAULT_CHILD_FRAME: &str = "talker";

/// What the talker says and which transform it broadcasts
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TalkerConfig {
    /// Prefix of every chatter message, followed by the tick counter
    pub greeting: String,
    pub parent_frame: String,
    pub child_frame: String,
    /// Translation of the child frame in the parent frame [x, y, z]
    pub translation: [f64; 3],
    /// Rotation of the child frame as roll, pitch, yaw in radians
    pub rotation_rpy: [f64; 3],
}

impl Default for TalkerConfig {
    fn default() -> Self {
        TalkerConfig {
            greeting: DEFAULT_GREETING.to_string(),
            parent_frame: DEFAULT_PARENT_FRAME.to_string(),
            child_frame: DEFAULT_CHILD_FRAME.to_string(),
            translation: [10.0, 10.0, 0.0],
            rotation_rpy: [0.0, 0.0, PI / 3.0],
        }
    }
}
