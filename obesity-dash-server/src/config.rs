//! Server configuration

use std::path::PathBuf;

use clap::Parser;
use obesity_dash::data::{DEFAULT_DATA_URL, DataSource};

/// Obesity category dashboard server
#[derive(Parser, Clone, Debug)]
#[command(name = "obesity-dash-server")]
#[command(about = "Serves the obesity category dashboard over HTTP")]
pub struct Config {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// URL of the CSV dataset
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    pub data_url: String,

    /// Read the dataset from a local CSV file instead of `--data-url`
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Open the dashboard in the default browser once the server is up
    #[arg(long)]
    pub open: bool,
}

impl Config {
    pub fn source(&self) -> DataSource {
        match &self.data_file {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Url(self.data_url.clone()),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_remote_dataset() {
        let config = Config::parse_from(["obesity-dash-server"]);

        assert_eq!(config.source(), DataSource::Url(DEFAULT_DATA_URL.to_string()));
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert!(!config.open);
    }

    #[test]
    fn data_file_wins_over_url() {
        let config = Config::parse_from([
            "obesity-dash-server",
            "--data-file",
            "obesity.csv",
            "-p",
            "3000",
            "--open",
        ]);

        assert_eq!(config.source(), DataSource::File(PathBuf::from("obesity.csv")));
        assert_eq!(config.port, 3000);
        assert!(config.open);
    }
}
