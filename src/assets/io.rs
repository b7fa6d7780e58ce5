use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tokio::runtime::Runtime;

use crate::errors::AssetLoadError;

/// Shared runtime for asset I/O. File reads are spawned here so callers
/// can await them from any executor (including `pollster`).
fn asset_runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create asset loader runtime"))
}

/// Asset byte source.
///
/// Supports asynchronous reads from local files and network resources.
pub trait AssetReader: Send + Sync {
    /// Reads the raw bytes of `uri`, resolved against the reader's root.
    fn read_bytes(
        &self,
        uri: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, AssetLoadError>> + Send;
}

/// Local file reader.
pub struct FileAssetReader {
    root_path: PathBuf,
}

impl FileAssetReader {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let root_path = if path.is_file() {
            path.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            path.to_path_buf()
        };
        Self { root_path }
    }

    #[inline]
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

impl AssetReader for FileAssetReader {
    async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>, AssetLoadError> {
        let path = self.root_path.join(uri);
        let handle = asset_runtime().spawn(async move { tokio::fs::read(&path).await });
        let data = handle
            .await
            .map_err(|e| AssetLoadError::Io(std::io::Error::other(e)))??;
        Ok(data)
    }
}

/// HTTP network reader.
pub struct HttpAssetReader {
    root_url: String,
}

impl HttpAssetReader {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            root_url: url.trim_end_matches('/').to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn root_url(&self) -> &str {
        &self.root_url
    }
}

impl AssetReader for HttpAssetReader {
    async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>, AssetLoadError> {
        let url = format!("{}/{}", self.root_url, uri.trim_start_matches('/'));
        let request = ehttp::Request::get(&url);
        let response = ehttp::fetch_async(request)
            .await
            .map_err(|message| AssetLoadError::Http {
                uri: url.clone(),
                message,
            })?;

        if !response.ok {
            return Err(AssetLoadError::HttpStatus {
                uri: url,
                status: response.status,
            });
        }
        Ok(response.bytes)
    }
}

/// Reader variant enum, avoiding trait objects on the load path.
#[derive(Clone)]
pub enum AssetReaderVariant {
    File(Arc<FileAssetReader>),
    Http(Arc<HttpAssetReader>),
}

impl AssetReaderVariant {
    /// Picks the reader matching a path or URL.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Http(Arc::new(HttpAssetReader::new(source)))
        } else {
            Self::File(Arc::new(FileAssetReader::new(source)))
        }
    }
}

impl AssetReader for AssetReaderVariant {
    async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>, AssetLoadError> {
        match self {
            Self::File(r) => r.read_bytes(uri).await,
            Self::Http(r) => r.read_bytes(uri).await,
        }
    }
}
