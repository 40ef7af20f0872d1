//! Client side configuration, `<home>/config/client.toml`.
//!
//! Values on the command line win over values in the file.

use std::path::{Path, PathBuf};

use client::{
    context::{BroadcastMode, OutputFormat},
    ClientContext,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::flags::{GlobalArgs, NodeArgs};

pub const DEFAULT_DIR_NAME: &str = ".ve";
pub const CONFIG_DIR: &str = "config";
pub const CLIENT_CONFIG_FILE: &str = "client.toml";
pub const DEFAULT_NODE: &str = "tcp://localhost:26657";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid node address {node}: {source}")]
    Node {
        node: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ClientConfig {
    pub chain_id: String,
    pub keyring_backend: String,
    pub output: OutputFormat,
    pub node: String,
    pub broadcast_mode: BroadcastMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chain_id: String::new(),
            keyring_backend: "os".to_owned(),
            output: OutputFormat::Text,
            node: DEFAULT_NODE.to_owned(),
            broadcast_mode: BroadcastMode::Sync,
        }
    }
}

/// `$HOME/.ve`, or `.ve` in the working directory when there is no home.
pub fn default_home() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(DEFAULT_DIR_NAME)
}

pub fn client_config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR).join(CLIENT_CONFIG_FILE)
}

impl ClientConfig {
    /// Reads the config under `home`. A missing file yields the defaults.
    pub fn load(home: &Path) -> Result<Self, ConfigError> {
        let path = client_config_path(home);
        if !path.exists() {
            debug!("no client config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn save(&self, home: &Path) -> Result<(), ConfigError> {
        let path = client_config_path(home);
        let io_err = |source| ConfigError::Io {
            path: path.clone(),
            source,
        };

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?).map_err(io_err)
    }

    /// Builds the client context for a command, flags taking precedence.
    pub fn client_context(
        &self,
        global: &GlobalArgs,
        node: &NodeArgs,
    ) -> Result<ClientContext, ConfigError> {
        let node = match &node.node {
            Some(node) => node.clone(),
            None => Url::parse(&self.node).map_err(|source| ConfigError::Node {
                node: self.node.clone(),
                source,
            })?,
        };

        let chain_id = global
            .chain_id
            .clone()
            .or_else(|| Some(self.chain_id.clone()).filter(|id| !id.is_empty()));

        Ok(ClientContext {
            chain_id,
            node: Some(node),
            output: self.output,
            broadcast_mode: self.broadcast_mode,
            ..Default::default()
        })
    }
}
