use crate::error::TrafficError;
use crate::traits::FragmentSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads the fragment from disk on every request so edits show up on the next
/// refresh.
pub struct LocalFragment {
    path: PathBuf,
}

impl LocalFragment {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FragmentSource for LocalFragment {
    async fn load(&self) -> Result<String, TrafficError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| TrafficError::FragmentUnavailable {
                path: self.path.clone(),
                source,
            })
    }
}
