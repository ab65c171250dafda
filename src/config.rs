//! Global configuration management
//! This module handles the loading and parsing of configuration files
//! and environment variables for the application.
//! Usage:
//! ```rust,ignore
//! use devconvert::config::SETTINGS;
//! println!("{}", SETTINGS.listen_addr);
//! ```

use config::{Config, ConfigError, Environment, File, FileFormat};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{env, fs, path::PathBuf};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub listen_addr: String,
    pub geo_api_url: String,
    pub request_timeout_secs: u64,
    pub image_path: PathBuf,
}

pub static SETTINGS: Lazy<Settings> = Lazy::new(|| {
    Settings::new().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    })
});

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // 1. built-in default config
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Config.toml"),
            FileFormat::Toml,
        ));

        // 2. try to load external config file next to the executable
        if let Ok(exe_path) = env::current_exe() {
            if let Some(dir) = exe_path.parent() {
                let external = dir.join("Config.toml");
                if fs::metadata(&external).is_ok() {
                    if let Some(path) = external.to_str() {
                        builder =
                            builder.add_source(File::with_name(path).required(false));
                    }
                }
            }
        }

        // 3. load environment variables
        builder = builder.add_source(Environment::with_prefix("APP").separator("__"));

        builder.build()?.try_deserialize()
    }
}
