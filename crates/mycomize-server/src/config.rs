//! Server Configuration

use std::path::PathBuf;

/// Where to listen and what to serve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to bind
    pub bind_addr: String,

    /// Built WASM frontend (index.html, .wasm, assets)
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let static_dir = std::env::var_os("STATIC_DIR")
            .map_or(defaults.static_dir, PathBuf::from);

        Self {
            bind_addr,
            static_dir,
        }
    }

    /// Served for every path that is not a file, so client-side routes load
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
