use std::fs;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use retrieval_core::{sanitize_component, MetadataRecord};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::{AssetPayload, FetchedAsset};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("image encode failed: {0}")]
    Encode(String),
    #[error("sidecar serialization failed: {0}")]
    Sidecar(#[from] serde_json::Error),
}

/// Create `dir` (and parents) if missing. Calling it again is a no-op.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file then renaming.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Reruns overwrite same-named files.
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenAsset {
    pub asset: PathBuf,
    pub sidecar: PathBuf,
    pub companions: Vec<PathBuf>,
}

/// Persists assets and their sidecars below one source directory.
pub struct AssetWriter {
    root: PathBuf,
}

impl AssetWriter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `<category>/<stem>.<ext>`, companions, then `<stem>.json`.
    ///
    /// If the sidecar cannot be written the asset and companions are removed again.
    pub fn write(
        &self,
        asset: &FetchedAsset,
        record: &MetadataRecord,
    ) -> Result<WrittenAsset, PersistError> {
        let dir = self.root.join(sanitize_component(&asset.category_dir));
        let writer = AtomicFileWriter::new(dir);
        let stem = &asset.file_stem;

        let bytes = encode_payload(&asset.payload)?;
        let asset_path = writer.write(&format!("{stem}.{}", asset.payload.extension()), &bytes)?;

        let mut written = vec![asset_path.clone()];
        let mut companions = Vec::with_capacity(asset.companions.len());
        for companion in &asset.companions {
            match writer.write(&format!("{stem}.{}", companion.extension), &companion.bytes) {
                Ok(path) => {
                    written.push(path.clone());
                    companions.push(path);
                }
                Err(err) => {
                    remove_all(&written);
                    return Err(err);
                }
            }
        }

        let sidecar = record
            .to_sidecar_json()
            .map_err(PersistError::from)
            .and_then(|json| writer.write(&format!("{stem}.json"), &json));
        match sidecar {
            Ok(sidecar) => Ok(WrittenAsset {
                asset: asset_path,
                sidecar,
                companions,
            }),
            Err(err) => {
                remove_all(&written);
                Err(err)
            }
        }
    }
}

fn encode_payload(payload: &AssetPayload) -> Result<Vec<u8>, PersistError> {
    match payload {
        AssetPayload::Bytes { bytes, .. } => Ok(bytes.clone()),
        AssetPayload::Image { image, format } => {
            let mut out = Cursor::new(Vec::new());
            image
                .write_to(&mut out, *format)
                .map_err(|err| PersistError::Encode(err.to_string()))?;
            Ok(out.into_inner())
        }
    }
}

fn remove_all(paths: &[PathBuf]) {
    for path in paths {
        if let Err(err) = fs::remove_file(path) {
            retrieval_logging::retrieval_warn!("could not remove {}: {err}", path.display());
        }
    }
}
