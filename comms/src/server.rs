use crate::error::CommsError;
use log::{debug, error, info};
use std::sync::Arc;
use talker::ChangeStringResponse;

type Handler = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Answers change_string requests on a zenoh queryable
#[derive(Clone)]
pub struct ChangeStringServer {
    session: zenoh::Session,
    key: String,
    handler: Handler,
}

impl ChangeStringServer {
    /// Create a server that answers each request with `handler(input)`
    pub fn new<F>(session: &zenoh::Session, key: &str, handler: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        ChangeStringServer {
            session: session.clone(),
            key: key.to_string(),
            handler: Arc::new(handler),
        }
    }

    /// Serve requests until the queryable is closed
    pub async fn run(&self) -> Result<(), CommsError> {
        let queryable = self
            .session
            .declare_queryable(self.key.as_str())
            .await
            .map_err(|e| CommsError::Zenoh(format!("Failed to declare queryable: {}", e)))?;

        info!("Queryable registered: {}", self.key);
        info!("Server is ready and processing requests");

        loop {
            match queryable.recv_async().await {
                Ok(query) => {
                    let payload_data = query.payload().map(|p| p.to_bytes()).unwrap_or_default();
                    let reply = self.handle(&payload_data);
                    match crate::serializers::serialize_reply(&reply) {
                        Ok(response_bytes) => {
                            if let Err(e) = query.reply(self.key.as_str(), response_bytes).await {
                                error!("Failed to send query response: {}", e);
                            }
                        }
                        Err(e) => error!("Failed to serialize reply: {}", e),
                    }
                }
                Err(e) => {
                    error!("Error receiving query: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Decode one request and apply the handler
    pub fn handle(&self, data: &[u8]) -> Result<ChangeStringResponse, String> {
        match crate::serializers::deserialize_request(data) {
            Ok(request) => {
                debug!("Received change_string request: {}", request.input);
                Ok(ChangeStringResponse {
                    output: (self.handler)(&request.input),
                })
            }
            Err(e) => {
                error!("Error handling change_string query: {}", e);
                Err(e.to_string())
            }
        }
    }
}
