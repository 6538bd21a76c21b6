use crate::error::CommsError;
use talker::StampedTransform;
use zenoh::handlers::FifoChannelHandler;
use zenoh::pubsub::Subscriber;
use zenoh::sample::Sample;

/// Receives chatter messages
pub struct ChatterListener {
    subscriber: Subscriber<FifoChannelHandler<Sample>>,
}

impl ChatterListener {
    pub async fn new(session: &zenoh::Session, key: &str) -> Result<Self, CommsError> {
        let subscriber = session
            .declare_subscriber(key.to_string())
            .await
            .map_err(|e| CommsError::Zenoh(format!("Failed to declare subscriber: {}", e)))?;
        Ok(ChatterListener { subscriber })
    }

    /// Wait for the next message
    pub async fn recv(&self) -> Result<String, CommsError> {
        let sample = self
            .subscriber
            .recv_async()
            .await
            .map_err(|e| CommsError::Zenoh(format!("Error receiving sample: {}", e)))?;
        crate::serializers::deserialize_string(&sample.payload().to_bytes())
    }
}

/// Receives broadcast frame transforms
pub struct TransformListener {
    subscriber: Subscriber<FifoChannelHandler<Sample>>,
}

impl TransformListener {
    pub async fn new(session: &zenoh::Session, key: &str) -> Result<Self, CommsError> {
        let subscriber = session
            .declare_subscriber(key.to_string())
            .await
            .map_err(|e| CommsError::Zenoh(format!("Failed to declare subscriber: {}", e)))?;
        Ok(TransformListener { subscriber })
    }

    /// Wait for the next transform
    pub async fn recv(&self) -> Result<StampedTransform, CommsError> {
        let sample = self
            .subscriber
            .recv_async()
            .await
            .map_err(|e| CommsError::Zenoh(format!("Error receiving sample: {}", e)))?;
        crate::serializers::deserialize_transform(&sample.payload().to_bytes())
    }
}
