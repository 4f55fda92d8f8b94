use crate::errors::LoadError;
use crate::models::Olympic;
use std::{
    env,
    future::Future,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::debug;

pub const DEFAULT_DATA_PATH: &str = "assets/mock/olympic.json";

/// Where the dataset comes from. The store fetches through this exactly once.
pub trait DataSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Olympic>, LoadError>> + Send;
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("OLYMPIC_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_DATA_PATH)
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Olympic>, LoadError> {
        debug!(path = %self.path.display(), "fetching olympic data");
        let bytes = fs::read(&self.path).await.map_err(|source| LoadError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
