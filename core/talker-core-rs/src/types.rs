use nalgebra::{Isometry3, Quaternion, Translation3, UnitQuaternion};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Duration;

use crate::error::TalkerError;

/// Loop frequency in ticks per second
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frequency(NonZeroU32);

impl Frequency {
    pub fn new(hz: u32) -> Result<Self, TalkerError> {
        NonZeroU32::new(hz)
            .map(Frequency)
            .ok_or_else(|| TalkerError::InvalidFrequency(hz.to_string()))
    }

    pub fn hz(&self) -> u32 {
        self.0.get()
    }

    /// Time between two consecutive tick boundaries
    pub fn period(&self) -> Duration {
        Duration::from_secs(1) / self.0.get()
    }
}

impl FromStr for Frequency {
    type Err = TalkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hz: u32 = s
            .trim()
            .parse()
            .map_err(|_| TalkerError::InvalidFrequency(s.to_string()))?;
        Frequency::new(hz)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request payload of the `change_string` service
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangeStringRequest {
    pub input: String,
}

/// Response payload of the `change_string` service
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangeStringResponse {
    pub output: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StampedIsometry {
    pub isometry: Isometry3<f64>,
    /// Timestamp in nanoseconds since Unix epoch
    pub stamp: i64,
}

impl StampedIsometry {
    /// Create a new StampedIsometry from a translation and an [x, y, z, w] quaternion
    pub fn new(translation: [f64; 3], rotation: [f64; 4], stamp_ns: i64) -> Self {
        let isometry = Isometry3::from_parts(
            Translation3::new(translation[0], translation[1], translation[2]),
            UnitQuaternion::from_quaternion(Quaternion::new(
                rotation[3], // w
                rotation[0], // x
                rotation[1], // y
                rotation[2], // z
            )),
        );
        StampedIsometry {
            isometry,
            stamp: stamp_ns,
        }
    }

    /// Create a new StampedIsometry from a translation and roll, pitch, yaw in radians
    pub fn from_rpy(translation: [f64; 3], rpy: [f64; 3], stamp_ns: i64) -> Self {
        let isometry = Isometry3::from_parts(
            Translation3::new(translation[0], translation[1], translation[2]),
            UnitQuaternion::from_euler_angles(rpy[0], rpy[1], rpy[2]),
        );
        StampedIsometry {
            isometry,
            stamp: stamp_ns,
        }
    }

    /// Get the translation as [x, y, z]
    pub fn translation(&self) -> [f64; 3] {
        let t = self.isometry.translation.vector;
        [t.x, t.y, t.z]
    }

    /// Get the rotation as [x, y, z, w] quaternion
    pub fn rotation(&self) -> [f64; 4] {
        let q = self.isometry.rotation.into_inner();
        [q.i, q.j, q.k, q.w]
    }

    /// Get the timestamp in nanoseconds
    pub fn stamp(&self) -> i64 {
        self.stamp
    }

    /// Get the timestamp in seconds as f64
    /// Careful here, this will truncate!
    pub fn stamp_secs(&self) -> f64 {
        self.stamp as f64 / 1_000_000_000.0
    }

    /// Get Euler angles (roll, pitch, yaw) in radians
    pub fn euler_angles(&self) -> [f64; 3] {
        let (roll, pitch, yaw) = self.isometry.rotation.euler_angles();
        [roll, pitch, yaw]
    }
}

impl fmt::Display for StampedIsometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.translation();
        let r = self.rotation();
        write!(
            f,
            "StampedIsometry(translation=[{:.3}, {:.3}, {:.3}], ",
            t[0], t[1], t[2]
        )?;
        write!(
            f,
            "rotation=[{:.3}, {:.3}, {:.3}, {:.3}], stamp={:.6}s)",
            r[0],
            r[1],
            r[2],
            r[3],
            self.stamp_secs()
        )
    }
}

/// A stamped isometry between two named coordinate frames
#[derive(Clone, Debug, PartialEq)]
pub struct StampedTransform {
    /// Parent frame, e.g. "world"
    pub parent: String,
    /// Child frame, e.g. "talker"
    pub child: String,
    pub isometry: StampedIsometry,
}

impl StampedTransform {
    pub fn new(parent: &str, child: &str, isometry: StampedIsometry) -> Self {
        StampedTransform {
            parent: parent.to_string(),
            child: child.to_string(),
            isometry,
        }
    }

    pub fn stamp(&self) -> i64 {
        self.isometry.stamp()
    }
}

impl fmt::Display for StampedTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.parent, self.child, self.isometry)
    }
}
