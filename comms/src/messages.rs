//! Wire types exchanged over zenoh.
//!
//! The change_string request and response travel as
//! [`talker::ChangeStringRequest`] and [`talker::ChangeStringResponse`].

use serde::{Deserialize, Serialize};

/// Payload of the chatter channel
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StringMessage {
    pub data: String,
}

/// A stamped transform between two frames
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransformMessage {
    pub parent: String,
    pub child: String,
    /// Nanoseconds since Unix epoch
    pub stamp_ns: i64,
    pub translation: [f64; 3],
    /// [x, y, z, w]
    pub rotation: [f64; 4],
}

/// Reply of the change_string queryable
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ServiceReply {
    Ok(talker::ChangeStringResponse),
    Err(String),
}
