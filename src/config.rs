use std::env;
use std::path::PathBuf;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "2026".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid u16".to_string())?;

        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        Ok(Config {
            host,
            port,
            data_dir,
        })
    }
}
