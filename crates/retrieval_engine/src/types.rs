use std::fmt;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use image::{DynamicImage, ImageFormat};
use retrieval_core::Provenance;
use thiserror::Error;

use crate::dataset::DatasetError;
use crate::rasterize::ConvertError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Io => write!(f, "io error"),
        }
    }
}

/// Result of fetching one candidate item.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(FetchedAsset),
    Filtered(FilterReason),
    Failed(ItemError),
}

/// Why an item was deliberately excluded. Not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterReason {
    NotEnglish { title: String },
    NotImage { mime: String },
    TooOld { published: NaiveDate },
    OffTopic,
}

impl fmt::Display for FilterReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterReason::NotEnglish { title } => write!(f, "non-English title {title:?}"),
            FilterReason::NotImage { mime } => write!(f, "non-image media type {mime}"),
            FilterReason::TooOld { published } => write!(f, "published {published}, before cutoff"),
            FilterReason::OffTopic => write!(f, "no matching topic"),
        }
    }
}

/// Per-item failure; counted and logged, never fatal to the source.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("request failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("image decode failed: {0}")]
    Decode(String),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("{0}")]
    Missing(String),
    #[error("all {attempts} label templates failed")]
    TemplatesExhausted { attempts: usize },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl From<image::ImageError> for ItemError {
    fn from(err: image::ImageError) -> Self {
        ItemError::Decode(err.to_string())
    }
}

/// Failure that ends a whole source; the coordinator moves on to the next one.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read {path}: {source}")]
    Input { path: PathBuf, source: io::Error },
    #[error("{path} line {line}: {message}")]
    MalformedInput {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("listing request failed: {0}")]
    Listing(#[from] FetchError),
    #[error("listing response unreadable: {0}")]
    ListingFormat(String),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Bytes ready to persist, or a decoded image encoded on write.
#[derive(Debug)]
pub enum AssetPayload {
    Bytes { bytes: Vec<u8>, extension: String },
    Image { image: DynamicImage, format: ImageFormat },
}

impl AssetPayload {
    pub fn extension(&self) -> &str {
        match self {
            AssetPayload::Bytes { extension, .. } => extension,
            AssetPayload::Image { format, .. } => {
                format.extensions_str().first().copied().unwrap_or("img")
            }
        }
    }
}

/// Extra file sharing the asset's base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Companion {
    pub extension: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
pub struct FetchedAsset {
    /// Unsanitized directory name below the source directory.
    pub category_dir: String,
    pub file_stem: String,
    pub payload: AssetPayload,
    pub companions: Vec<Companion>,
    pub provenance: Provenance,
}
