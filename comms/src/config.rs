use std::time::Duration;

pub const CHATTER_TOPIC: &str = "chatter";
pub const CHANGE_STRING_SERVICE: &str = "change_string";
pub const TF_TOPIC: &str = "tf";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ZenohConfig {
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Endpoints to connect to, e.g. "tcp/127.0.0.1:7447"
    #[serde(default)]
    pub connect: Vec<String>,
    #[serde(default = "default_true")]
    pub multicast_scouting: bool,
    #[serde(default = "default_chatter_key")]
    pub chatter_key: String,
    #[serde(default = "default_service_key")]
    pub service_key: String,
    #[serde(default = "default_tf_key")]
    pub tf_key: String,
    /// How long a change_string call waits for a reply
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

fn default_mode() -> String {
    "peer".to_string()
}

fn default_true() -> bool {
    true
}

fn default_chatter_key() -> String {
    CHATTER_TOPIC.to_string()
}

fn default_service_key() -> String {
    CHANGE_STRING_SERVICE.to_string()
}

fn default_tf_key() -> String {
    TF_TOPIC.to_string()
}

fn default_query_timeout_ms() -> u64 {
    1000
}

impl Default for ZenohConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            connect: Vec::new(),
            multicast_scouting: default_true(),
            chatter_key: default_chatter_key(),
            service_key: default_service_key(),
            tf_key: default_tf_key(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

impl ZenohConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn to_zenoh_config(&self) -> Result<zenoh::Config, crate::error::CommsError> {
        let mut config = zenoh::Config::default();
        config
            .insert_json5("mode", &format!("\"{}\"", self.mode))
            .map_err(|e| {
                crate::error::CommsError::Config(format!("Failed to configure zenoh: {}", e))
            })?;

        if !self.connect.is_empty() {
            let endpoints = self
                .connect
                .iter()
                .map(|e| format!("\"{}\"", e))
                .collect::<Vec<_>>()
                .join(",");
            config
                .insert_json5("connect/endpoints", &format!("[{}]", endpoints))
                .map_err(|e| {
                    crate::error::CommsError::Config(format!(
                        "Invalid connect endpoints {:?}: {}",
                        self.connect, e
                    ))
                })?;
        }

        config
            .insert_json5(
                "scouting/multicast/enabled",
                &self.multicast_scouting.to_string(),
            )
            .map_err(|e| {
                crate::error::CommsError::Config(format!("Failed to configure scouting: {}", e))
            })?;

        Ok(config)
    }
}
