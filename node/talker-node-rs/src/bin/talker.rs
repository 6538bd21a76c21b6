//! Talker binary
//!
//! `talker <FREQUENCY> [--config FILE]` runs the loop until Ctrl-C.

use clap::Parser;
use log::info;
use talker::Shutdown;
use talker_node::{cli::Args, NodeConfig, TalkerNode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    info!("Frequency is: {}", args.frequency);

    let config = match &args.config {
        Some(path) => NodeConfig::load(path)?,
        None => NodeConfig::default(),
    };

    let mut node = TalkerNode::open(config).await?;

    let shutdown = Shutdown::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal.trigger();
        }
    });

    let stats = node.run(args.frequency, &shutdown).await;
    info!(
        "Published {} messages ({} failed), {} responses, {} calls without response",
        stats.published, stats.publish_failures, stats.responses, stats.rpc_failures
    );

    node.close().await?;
    Ok(())
}
