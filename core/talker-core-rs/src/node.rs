//! The talker loop.
//!
//! Every tick broadcasts the configured frame transform, calls the
//! `change_string` service with a counter-stamped greeting and publishes the
//! same greeting on the chatter channel. The transports are supplied by the
//! caller through [`MessageSink`], [`RpcClient`] and [`FrameBroadcaster`].
#![allow(async_fn_in_trait)]

use log::{debug, error, info, trace, warn};
use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::TalkerConfig;
use crate::rate::Rate;
use crate::shutdown::Shutdown;
use crate::types::{
    ChangeStringRequest, ChangeStringResponse, Frequency, StampedIsometry, StampedTransform,
};

/// Outbound pub/sub channel
pub trait MessageSink {
    type Error: Display;

    async fn publish(&self, text: &str) -> Result<(), Self::Error>;
}

/// Outbound synchronous request/response call
pub trait RpcClient {
    type Error: Display;

    async fn call(&self, request: &ChangeStringRequest)
        -> Result<ChangeStringResponse, Self::Error>;
}

/// Outbound coordinate frame broadcast
pub trait FrameBroadcaster {
    type Error: Display;

    async fn send_transform(&self, transform: &StampedTransform) -> Result<(), Self::Error>;
}

/// Source of broadcast timestamps
pub trait Clock {
    /// Nanoseconds since Unix epoch
    fn now_ns(&self) -> i64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ns(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_nanos()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Build the chatter text for a tick
pub fn chatter_message(greeting: &str, count: u64) -> String {
    format!("{}{}", greeting, count)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TalkerStats {
    pub ticks: u64,
    pub published: u64,
    pub publish_failures: u64,
    pub responses: u64,
    pub rpc_failures: u64,
    pub broadcast_failures: u64,
}

/// What happened during one tick
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub message: String,
    /// `None` if the service did not answer
    pub response: Option<String>,
    /// Whether the message reached the sink
    pub published: bool,
    pub stamp: i64,
}

pub struct Talker<S, R, B, C = SystemClock> {
    config: TalkerConfig,
    sink: S,
    rpc: R,
    broadcaster: B,
    clock: C,
    count: u64,
    last_stamp: Option<i64>,
    stats: TalkerStats,
}

impl<S, R, B> Talker<S, R, B, SystemClock>
where
    S: MessageSink,
    R: RpcClient,
    B: FrameBroadcaster,
{
    pub fn new(config: TalkerConfig, sink: S, rpc: R, broadcaster: B) -> Self {
        Self::with_clock(config, sink, rpc, broadcaster, SystemClock)
    }
}

impl<S, R, B, C> Talker<S, R, B, C>
where
    S: MessageSink,
    R: RpcClient,
    B: FrameBroadcaster,
    C: Clock,
{
    pub fn with_clock(config: TalkerConfig, sink: S, rpc: R, broadcaster: B, clock: C) -> Self {
        Talker {
            config,
            sink,
            rpc,
            broadcaster,
            clock,
            count: 0,
            last_stamp: None,
            stats: TalkerStats::default(),
        }
    }

    /// Current value of the tick counter
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn stats(&self) -> TalkerStats {
        self.stats
    }

    /// Run until `shutdown` is triggered.
    ///
    /// The flag is checked before any work of an iteration; it is the only
    /// way out of the loop.
    pub async fn run(&mut self, frequency: Frequency, shutdown: &Shutdown) -> TalkerStats {
        let mut rate = Rate::new(frequency);
        debug!(
            "Talker running at {} Hz (period {:?})",
            frequency,
            rate.period()
        );

        while !shutdown.is_triggered() {
            self.tick().await;
            if !rate.sleep().await {
                debug!("Tick {} overran its period", self.count);
            }
            self.count += 1;
        }

        info!("Shutdown requested after {} ticks", self.stats.ticks);
        self.stats
    }

    /// Broadcast, call, publish for the current counter value.
    /// Does not advance the counter.
    pub async fn tick(&mut self) -> TickReport {
        let transform = self.frame_transform();
        info!("Set rotation!");
        if let Err(e) = self.broadcaster.send_transform(&transform).await {
            error!("Failed to broadcast transform {}: {}", transform, e);
            self.stats.broadcast_failures += 1;
        } else {
            trace!("Broadcast {}", transform);
        }

        let message = chatter_message(&self.config.greeting, self.count);

        let request = ChangeStringRequest {
            input: message.clone(),
        };
        let response = match self.rpc.call(&request).await {
            Ok(response) => {
                warn!("The response was: {}", response.output);
                self.stats.responses += 1;
                Some(response.output)
            }
            Err(e) => {
                error!("Did not get a response from the server.");
                debug!("change_string call failed: {}", e);
                self.stats.rpc_failures += 1;
                None
            }
        };

        let published = match self.sink.publish(&message).await {
            Ok(()) => {
                self.stats.published += 1;
                info!("Message: {}", message);
                true
            }
            Err(e) => {
                error!("Failed to publish '{}': {}", message, e);
                self.stats.publish_failures += 1;
                false
            }
        };

        self.spin_once();
        self.stats.ticks += 1;

        TickReport {
            tick: self.count,
            message,
            response,
            published,
            stamp: transform.stamp(),
        }
    }

    /// Hook for inbound events. The talker registers no subscriptions, so
    /// there is nothing to drain.
    fn spin_once(&mut self) {
        trace!("No inbound callbacks registered");
    }

    fn frame_transform(&mut self) -> StampedTransform {
        let now = self.clock.now_ns();
        // Stamps never go backwards, even if the wall clock does
        let stamp = match self.last_stamp {
            Some(last) if now < last => last,
            _ => now,
        };
        self.last_stamp = Some(stamp);

        StampedTransform::new(
            &self.config.parent_frame,
            &self.config.child_frame,
            StampedIsometry::from_rpy(self.config.translation, self.config.rotation_rpy, stamp),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::sync::Mutex;

    /// Keeps the message of every info record
    struct InfoLog(Mutex<Vec<String>>);

    impl log::Log for InfoLog {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Info
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.0.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static INFO_LOG: InfoLog = InfoLog(Mutex::new(Vec::new()));

    struct Recorder {
        published: RefCell<Vec<String>>,
    }

    impl MessageSink for &Recorder {
        type Error = String;

        async fn publish(&self, text: &str) -> Result<(), String> {
            self.published.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct Upper;

    impl RpcClient for Upper {
        type Error = String;

        async fn call(
            &self,
            request: &ChangeStringRequest,
        ) -> Result<ChangeStringResponse, String> {
            Ok(ChangeStringResponse {
                output: request.input.to_uppercase(),
            })
        }
    }

    struct Discard;

    impl FrameBroadcaster for Discard {
        type Error = String;

        async fn send_transform(&self, _transform: &StampedTransform) -> Result<(), String> {
            Ok(())
        }
    }

    struct SteppingClock {
        readings: RefCell<Vec<i64>>,
        last: Cell<i64>,
    }

    impl Clock for SteppingClock {
        fn now_ns(&self) -> i64 {
            let mut readings = self.readings.borrow_mut();
            if !readings.is_empty() {
                self.last.set(readings.remove(0));
            }
            self.last.get()
        }
    }

    #[test]
    fn test_chatter_message() {
        assert_eq!(
            chatter_message("Hello to everyone in ENPM 808X! ", 0),
            "Hello to everyone in ENPM 808X! 0"
        );
        assert_eq!(chatter_message("hi ", 12345), "hi 12345");
    }

    #[test]
    fn test_system_clock_is_past_epoch() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_ns() > 1_577_836_800_000_000_000);
    }

    #[tokio::test]
    async fn test_tick_does_not_advance_counter() {
        let recorder = Recorder {
            published: RefCell::new(Vec::new()),
        };
        let mut talker = Talker::new(TalkerConfig::default(), &recorder, Upper, Discard);

        let report = talker.tick().await;
        assert_eq!(report.tick, 0);
        assert_eq!(report.message, "Hello to everyone in ENPM 808X! 0");
        assert_eq!(
            report.response.as_deref(),
            Some("HELLO TO EVERYONE IN ENPM 808X! 0")
        );
        assert!(report.published);
        assert_eq!(talker.count(), 0);
        assert_eq!(talker.stats().ticks, 1);
        assert_eq!(talker.stats().responses, 1);
        assert_eq!(recorder.published.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_stamp_is_clamped_when_clock_goes_back() {
        let recorder = Recorder {
            published: RefCell::new(Vec::new()),
        };
        let clock = SteppingClock {
            readings: RefCell::new(vec![100, 50, 200]),
            last: Cell::new(0),
        };
        let mut talker =
            Talker::with_clock(TalkerConfig::default(), &recorder, Upper, Discard, clock);

        let stamps: Vec<i64> = [
            talker.tick().await.stamp,
            talker.tick().await.stamp,
            talker.tick().await.stamp,
        ]
        .to_vec();
        assert_eq!(stamps, vec![100, 100, 200]);
    }

    #[tokio::test]
    async fn test_every_tick_logs_rotation() {
        let _ = log::set_logger(&INFO_LOG);
        log::set_max_level(log::LevelFilter::Info);

        let recorder = Recorder {
            published: RefCell::new(Vec::new()),
        };
        let mut talker = Talker::new(TalkerConfig::default(), &recorder, Upper, Discard);
        talker.tick().await;
        talker.tick().await;

        let lines = INFO_LOG.0.lock().unwrap();
        assert!(lines.iter().filter(|l| *l == "Set rotation!").count() >= 2);
        assert!(lines
            .iter()
            .any(|l| l == "Message: Hello to everyone in ENPM 808X! 0"));
    }
}
