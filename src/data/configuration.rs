use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Default, Debug)]
pub struct Configuration {
    pub database: DatabaseConfig,
}

impl Configuration {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = std::fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&config)?;
        Ok(cfg)
    }
}

#[derive(Deserialize, Serialize, Default, Debug)]
pub struct DatabaseConfig {
    /// Directory the SQLite database file lives in.
    pub path: String,
}
