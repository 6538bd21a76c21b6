use comms::{open_session, ChatterListener, ZenohConfig};
use log::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = ZenohConfig::default();
    let session = open_session(&config).await?;
    let listener = ChatterListener::new(&session, &config.chatter_key).await?;
    info!("Subscribed to topic: {}", config.chatter_key);

    loop {
        tokio::select! {
            message = listener.recv() => match message {
                Ok(text) => info!("I heard: [{}]", text),
                Err(e) => error!("{}", e),
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}
