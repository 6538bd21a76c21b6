//! change_string service server
//!
//! Replies to every request with the input unchanged, or with a fixed text
//! when `--output` is given.

use clap::Parser;
use comms::{open_session, ChangeStringServer, ZenohConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text returned for every request instead of echoing the input
    #[arg(short, long)]
    output: Option<String>,

    /// Zenoh key of the service
    #[arg(long, default_value = comms::config::CHANGE_STRING_SERVICE)]
    key: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let session = open_session(&ZenohConfig::default()).await?;

    let server = match args.output {
        Some(output) => ChangeStringServer::new(&session, &args.key, move |_| output.clone()),
        None => ChangeStringServer::new(&session, &args.key, |input| input.to_string()),
    };

    tokio::select! {
        result = server.run() => result?,
        _ = tokio::signal::ctrl_c() => log::info!("Server shutdown requested"),
    }

    Ok(())
}
