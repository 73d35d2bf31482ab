use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DECK: &str = "rider-waite-tarot.yaml";
const DEFAULT_IMG_DIR: &str = "img";

/// Which action transport(s) the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// HTML page plus htmx fragments
    #[default]
    Render,
    /// JSON endpoints under `/api/tarot`
    Api,
    /// Both of the above
    Both,
}

impl Transport {
    pub fn serves_render(self) -> bool {
        matches!(self, Transport::Render | Transport::Both)
    }

    pub fn serves_api(self) -> bool {
        matches!(self, Transport::Api | Transport::Both)
    }
}

impl FromStr for Transport {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "render" | "html" => Ok(Transport::Render),
            "api" | "json" => Ok(Transport::Api),
            "both" => Ok(Transport::Both),
            other => Err(AppError::config(format!(
                "UNFOLDFATE_TRANSPORT must be one of render, api, both; got '{other}'"
            ))),
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// YAML deck description
    pub deck_path: PathBuf,
    /// Directory served under `/img`
    pub img_dir: PathBuf,
    pub transport: Transport,
}

impl ServerConfig {
    /// Read configuration from `UNFOLDFATE_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("UNFOLDFATE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("UNFOLDFATE_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!(
                    "UNFOLDFATE_PORT must be a valid port number, got '{raw}'"
                ))
            })?,
            None => DEFAULT_PORT,
        };

        let deck_path = lookup("UNFOLDFATE_DECK")
            .unwrap_or_else(|| DEFAULT_DECK.to_string())
            .into();
        let img_dir = lookup("UNFOLDFATE_IMG_DIR")
            .unwrap_or_else(|| DEFAULT_IMG_DIR.to_string())
            .into();

        let transport = match lookup("UNFOLDFATE_TRANSPORT") {
            Some(raw) => raw.parse()?,
            None => Transport::default(),
        };

        Ok(Self {
            host,
            port,
            deck_path,
            img_dir,
            transport,
        })
    }
}
