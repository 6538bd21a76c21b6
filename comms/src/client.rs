use std::time::Duration;

use crate::config::ZenohConfig;
use crate::error::CommsError;
use log::{debug, info};
use talker::{
    ChangeStringRequest, ChangeStringResponse, FrameBroadcaster, MessageSink, RpcClient,
    StampedTransform,
};

/// Open a zenoh session for the given configuration
pub async fn open_session(config: &ZenohConfig) -> Result<zenoh::Session, CommsError> {
    let zenoh_config = config.to_zenoh_config()?;

    let session = zenoh::open(zenoh_config)
        .await
        .map_err(|e| CommsError::Zenoh(format!("Failed to open zenoh session: {}", e)))?;
    info!("Zenoh session established in {} mode", config.mode);

    Ok(session)
}

/// Publishes chatter messages
pub struct ChatterPublisher {
    session: zenoh::Session,
    key: String,
}

impl ChatterPublisher {
    pub fn new(session: &zenoh::Session, key: &str) -> Self {
        ChatterPublisher {
            session: session.clone(),
            key: key.to_string(),
        }
    }
}

impl MessageSink for ChatterPublisher {
    type Error = CommsError;

    async fn publish(&self, text: &str) -> Result<(), CommsError> {
        let payload = crate::serializers::serialize_string(text)?;

        self.session
            .put(self.key.as_str(), zenoh::bytes::ZBytes::from(payload))
            .await
            .map_err(|e| CommsError::Zenoh(e.to_string()))?;

        Ok(())
    }
}

/// Calls the change_string service
pub struct ChangeStringClient {
    session: zenoh::Session,
    key: String,
    timeout: Duration,
}

impl ChangeStringClient {
    pub fn new(session: &zenoh::Session, key: &str, timeout: Duration) -> Self {
        ChangeStringClient {
            session: session.clone(),
            key: key.to_string(),
            timeout,
        }
    }
}

impl RpcClient for ChangeStringClient {
    type Error = CommsError;

    async fn call(
        &self,
        request: &ChangeStringRequest,
    ) -> Result<ChangeStringResponse, CommsError> {
        let request_data = crate::serializers::serialize_request(request)?;

        let replies = self
            .session
            .get(self.key.as_str())
            .payload(zenoh::bytes::ZBytes::from(request_data))
            .timeout(self.timeout)
            .await
            .map_err(|e| CommsError::Zenoh(format!("Failed to send query: {}", e)))?;

        // Wait for first reply
        if let Ok(reply) = replies.recv_async().await {
            return match reply.result() {
                Ok(sample) => {
                    let response_data = sample.payload().to_bytes();
                    match crate::serializers::deserialize_reply(&response_data)? {
                        Ok(response) => {
                            debug!("{} replied: {}", self.key, response.output);
                            Ok(response)
                        }
                        Err(error_message) => Err(CommsError::Service(error_message)),
                    }
                }
                Err(e) => Err(CommsError::Zenoh(format!("Query error: {:?}", e))),
            };
        }

        Err(CommsError::NoResponse(self.key.clone()))
    }
}

/// Broadcasts stamped frame transforms
pub struct TransformBroadcaster {
    session: zenoh::Session,
    key: String,
}

impl TransformBroadcaster {
    pub fn new(session: &zenoh::Session, key: &str) -> Self {
        TransformBroadcaster {
            session: session.clone(),
            key: key.to_string(),
        }
    }
}

impl FrameBroadcaster for TransformBroadcaster {
    type Error = CommsError;

    async fn send_transform(&self, transform: &StampedTransform) -> Result<(), CommsError> {
        let payload = crate::serializers::serialize_transform(transform)?;

        self.session
            .put(self.key.as_str(), zenoh::bytes::ZBytes::from(payload))
            .await
            .map_err(|e| CommsError::Zenoh(e.to_string()))?;

        Ok(())
    }
}
