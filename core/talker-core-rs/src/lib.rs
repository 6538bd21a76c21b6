pub mod config;
pub mod error;
pub mod node;
pub mod rate;
pub mod shutdown;
pub mod types;

pub use config::TalkerConfig;
pub use error::TalkerError;
pub use node::{
    chatter_message, Clock, FrameBroadcaster, MessageSink, RpcClient, SystemClock, Talker,
    TalkerStats, TickReport,
};
pub use rate::Rate;
pub use shutdown::Shutdown;
pub use types::{
    ChangeStringRequest, ChangeStringResponse, Frequency, StampedIsometry, StampedTransform,
};
