/// Errors raised while setting up the talker
#[derive(Debug, thiserror::Error)]
pub enum TalkerError {
    #[error("Invalid frequency '{0}': expected an integer greater than zero")]
    InvalidFrequency(String),
}
