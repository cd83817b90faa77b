use crate::store::StorageMediums;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub storage: StorageMediums,
    pub json_storage_path: PathBuf,
    /// Directory of frontend assets served for non-API paths.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
