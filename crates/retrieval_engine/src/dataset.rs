//! Dataset host boundary and archive extraction.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use retrieval_core::DatasetConfig;
use retrieval_logging::{retrieval_debug, retrieval_info};
use serde::Deserialize;
use thiserror::Error;

use crate::{FetchError, HttpClient, HttpRequest};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset host credentials unavailable: {0}")]
    Credentials(String),
    #[error("download of {dataset} failed: {source}")]
    Download { dataset: String, source: FetchError },
    #[error("archive {} not found", path.display())]
    MissingArchive { path: PathBuf },
    #[error("archive {} unreadable: {message}", path.display())]
    Archive { path: PathBuf, message: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Given a dataset id, produce a local archive path.
#[async_trait::async_trait]
pub trait DatasetHost: Send + Sync {
    async fn fetch_archive(&self, dataset: &str, download_dir: &Path)
        -> Result<PathBuf, DatasetError>;
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct KaggleCredentials {
    pub username: String,
    pub key: String,
}

impl std::fmt::Debug for KaggleCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KaggleCredentials")
            .field("username", &self.username)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl KaggleCredentials {
    /// `KAGGLE_USERNAME`/`KAGGLE_KEY` from `lookup`, else the JSON file at `config_file`.
    pub fn resolve<F>(lookup: F, config_file: Option<&Path>) -> Result<Self, DatasetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let (Some(username), Some(key)) = (lookup("KAGGLE_USERNAME"), lookup("KAGGLE_KEY")) {
            return Ok(Self { username, key });
        }
        let path = config_file.ok_or_else(|| {
            DatasetError::Credentials("no KAGGLE_USERNAME/KAGGLE_KEY and no home directory".into())
        })?;
        let text = fs::read_to_string(path).map_err(|err| {
            DatasetError::Credentials(format!("{}: {err}", path.display()))
        })?;
        serde_json::from_str(&text)
            .map_err(|err| DatasetError::Credentials(format!("{}: {err}", path.display())))
    }

    /// `~/.kaggle/kaggle.json`, when a home directory is known.
    pub fn default_config_file() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".kaggle").join("kaggle.json"))
    }
}

/// Downloads dataset archives from the Kaggle REST API.
pub struct KaggleHost {
    http: Arc<dyn HttpClient>,
    api_url: String,
    credentials: Result<KaggleCredentials, String>,
}

impl KaggleHost {
    /// Credentials are only demanded once a download is actually requested.
    pub fn new(
        http: Arc<dyn HttpClient>,
        api_url: impl Into<String>,
        credentials: Result<KaggleCredentials, DatasetError>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            credentials: credentials.map_err(|err| match err {
                DatasetError::Credentials(message) => message,
                other => other.to_string(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl DatasetHost for KaggleHost {
    async fn fetch_archive(
        &self,
        dataset: &str,
        download_dir: &Path,
    ) -> Result<PathBuf, DatasetError> {
        let credentials = self
            .credentials
            .as_ref()
            .map_err(|message| DatasetError::Credentials(message.clone()))?;

        let dest = download_dir.join(format!("{}.zip", dataset_slug(dataset)));
        let url = format!(
            "{}/datasets/download/{dataset}",
            self.api_url.trim_end_matches('/')
        );
        retrieval_info!("downloading dataset {dataset} to {}", dest.display());
        let request = HttpRequest::get(url).basic_auth(&credentials.username, &credentials.key);
        let bytes = self
            .http
            .download_to_file(&request, &dest)
            .await
            .map_err(|source| DatasetError::Download {
                dataset: dataset.to_string(),
                source,
            })?;
        retrieval_debug!("downloaded {bytes} bytes");
        Ok(dest)
    }
}

fn dataset_slug(dataset: &str) -> &str {
    dataset.rsplit('/').next().unwrap_or(dataset)
}

/// Unpack `archive` into `dest`, returning `dest`. Entries escaping `dest` are rejected.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<PathBuf, DatasetError> {
    if !archive.is_file() {
        return Err(DatasetError::MissingArchive {
            path: archive.to_path_buf(),
        });
    }
    let file = fs::File::open(archive)?;
    let unreadable = |err: zip::result::ZipError| DatasetError::Archive {
        path: archive.to_path_buf(),
        message: err.to_string(),
    };
    let mut zip = zip::ZipArchive::new(file).map_err(unreadable)?;
    fs::create_dir_all(dest)?;
    zip.extract(dest).map_err(unreadable)?;
    retrieval_info!(
        "extracted {} entries from {} to {}",
        zip.len(),
        archive.display(),
        dest.display()
    );
    Ok(dest.to_path_buf())
}

/// Download and/or extract according to `config`; returns the directory to list.
pub async fn prepare_dataset(
    host: &dyn DatasetHost,
    config: &DatasetConfig,
) -> Result<PathBuf, DatasetError> {
    let mut archive = config.archive_path();
    if config.download {
        archive = host.fetch_archive(&config.dataset, &config.download_dir).await?;
    }
    if config.extract {
        extract_archive(&archive, &config.extract_dir)?;
    }
    Ok(config.extract_dir.clone())
}

/// Public landing page of a Kaggle dataset, used as the sidecar URL for its files.
pub fn dataset_page_url(dataset: &str) -> String {
    format!("https://www.kaggle.com/datasets/{dataset}")
}
