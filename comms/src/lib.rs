//! Zenoh transports for the talker.
//!
//! Chatter messages are `put` on the chatter key, frame transforms on the tf
//! key, and the change_string service is a `get` answered by a queryable.
//! Payloads are bincode encoded.

pub mod client;
pub mod config;
pub mod error;
pub mod listener;
pub mod messages;
pub mod serializers;
pub mod server;

pub use client::{open_session, ChangeStringClient, ChatterPublisher, TransformBroadcaster};
pub use config::ZenohConfig;
pub use error::CommsError;
pub use listener::{ChatterListener, TransformListener};
pub use server::ChangeStringServer;
