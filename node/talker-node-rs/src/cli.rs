use clap::Parser;
use std::path::PathBuf;
use talker::Frequency;

/// Publishes on chatter, calls change_string and broadcasts world -> talker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Loop frequency in Hz, an integer greater than zero
    pub frequency: Frequency,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_argument() {
        let args = Args::try_parse_from(["talker", "10"]).unwrap();
        assert_eq!(args.frequency.hz(), 10);
        assert!(args.config.is_none());

        let args = Args::try_parse_from(["talker", "2", "--config", "talker.toml"]).unwrap();
        assert_eq!(args.frequency.hz(), 2);
        assert_eq!(args.config, Some(PathBuf::from("talker.toml")));
    }

    #[test]
    fn test_invalid_frequency_is_rejected() {
        assert!(Args::try_parse_from(["talker"]).is_err());
        assert!(Args::try_parse_from(["talker", "0"]).is_err());
        assert!(Args::try_parse_from(["talker", "fast"]).is_err());
        assert!(Args::try_parse_from(["talker", "2.5"]).is_err());
    }
}
