//! Talker node over zenoh
//!
//! Wires the [`talker::Talker`] loop to the zenoh transports from `comms`:
//! chatter messages, the change_string service and tf broadcasts.
//!
//! # Example
//! ```no_run
//! use talker::{Frequency, Shutdown};
//! use talker_node::{NodeConfig, TalkerNode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut node = TalkerNode::open(NodeConfig::default()).await?;
//!     let shutdown = Shutdown::new();
//!     let stats = node.run(Frequency::new(10)?, &shutdown).await;
//!     println!("published {} messages", stats.published);
//!     node.close().await?;
//!     Ok(())
//! }
//! ```

pub mod cli;

use comms::{ChangeStringClient, ChatterPublisher, CommsError, TransformBroadcaster, ZenohConfig};
use log::info;
use std::path::Path;
use talker::{Frequency, Shutdown, Talker, TalkerConfig, TalkerStats};

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error(transparent)]
    Comms(#[from] CommsError),

    #[error("Failed to load config: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Node configuration loaded from file
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub talker: TalkerConfig,
    pub zenoh: ZenohConfig,
}

impl NodeConfig {
    /// Parse a TOML document; missing tables and fields take their defaults
    pub fn from_toml(content: &str) -> Result<Self, NodeError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn load(path: &Path) -> Result<Self, NodeError> {
        let content = std::fs::read_to_string(path).map_err(|source| NodeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }
}

/// Talker loop bound to a zenoh session
pub struct TalkerNode {
    session: zenoh::Session,
    talker: Talker<ChatterPublisher, ChangeStringClient, TransformBroadcaster>,
}

impl TalkerNode {
    pub async fn open(config: NodeConfig) -> Result<Self, NodeError> {
        let session = comms::open_session(&config.zenoh).await?;
        let keys = &config.zenoh;

        let talker = Talker::new(
            config.talker.clone(),
            ChatterPublisher::new(&session, &keys.chatter_key),
            ChangeStringClient::new(&session, &keys.service_key, keys.query_timeout()),
            TransformBroadcaster::new(&session, &keys.tf_key),
        );
        info!(
            "Publishing on '{}', calling '{}', broadcasting {} -> {} on '{}'",
            keys.chatter_key,
            keys.service_key,
            config.talker.parent_frame,
            config.talker.child_frame,
            keys.tf_key
        );

        Ok(TalkerNode { session, talker })
    }

    /// Run the loop until `shutdown` is triggered
    pub async fn run(&mut self, frequency: Frequency, shutdown: &Shutdown) -> TalkerStats {
        self.talker.run(frequency, shutdown).await
    }

    pub async fn close(self) -> Result<(), NodeError> {
        self.session
            .close()
            .await
            .map_err(|e| CommsError::Zenoh(format!("Failed to close session: {}", e)))?;
        Ok(())
    }
}
