//! Configuration management
//!
//! Layered lookup: built-in defaults, then an optional configuration file,
//! then `TICKET_DESK_*` environment variables. CLI flags are applied on top
//! by the binary. Defaults: port 4000, `data.json` next to the process.

use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default bind port
pub const DEFAULT_PORT: u16 = 4000;
/// Default backing file for the document store
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Host to bind the HTTP listener to
    pub host: String,
    /// Port to bind the HTTP listener to
    pub port: u16,
    /// Path to the JSON document backing the store
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Load configuration with the standard layering
    ///
    /// With an explicit `file`, that file must exist and parse; without one,
    /// a `ticket-desk.*` file in the working directory is used when present.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("data_file", DEFAULT_DATA_FILE)?;

        builder = match file {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name("ticket-desk").required(false)),
        };

        let settings = builder
            .add_source(config::Environment::with_prefix("TICKET_DESK").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration, falling back to defaults on any failure
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load(None).unwrap_or_default()
    }

    /// The `host:port` address to bind
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
