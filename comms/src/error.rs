/// Errors that can occur in the comms package
#[derive(Debug, thiserror::Error)]
pub enum CommsError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Zenoh error: {0}")]
    Zenoh(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No response received from {0}")]
    NoResponse(String),

    #[error("Service error: {0}")]
    Service(String),
}
