//! File persistence helper for photo binaries.
//!
//! Maps a photo id to a file under the upload directory. The directory is
//! created lazily on first write.

use std::path::PathBuf;

/// Stores photo binaries on disk, named by photo id.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write the bytes for a photo and return the generated relative file name.
    pub async fn save(
        &self,
        id: i64,
        extension: Option<&str>,
        bytes: &[u8],
    ) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let name = match extension {
            Some(ext) => format!("photo_{}.{}", id, ext),
            None => format!("photo_{}", id),
        };
        tokio::fs::write(self.dir.join(&name), bytes).await?;
        Ok(name)
    }

    /// Read a stored file back, or `None` if it is missing or unreadable.
    pub async fn read(&self, name: &str) -> Option<Vec<u8>> {
        match tokio::fs::read(self.dir.join(name)).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::error!("Failed to read photo file {}: {}", name, e);
                None
            }
        }
    }

    /// Delete a stored file. Errors are logged, never surfaced.
    pub async fn remove(&self, name: &str) {
        if let Err(e) = tokio::fs::remove_file(self.dir.join(name)).await {
            tracing::warn!("Failed to remove photo file {}: {}", name, e);
        }
    }
}
