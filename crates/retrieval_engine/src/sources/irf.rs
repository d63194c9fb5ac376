//! Irregular facades dataset: JPEG images paired with JSON annotations.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use retrieval_core::{derive_file_stem, DatasetConfig, IrfConfig, Provenance, SourceDescriptor, SourceKind};
use retrieval_logging::{retrieval_debug, retrieval_info};
use serde::Deserialize;
use walkdir::WalkDir;

use crate::dataset::{dataset_page_url, prepare_dataset};
use crate::imaging::probe_file_dimensions;
use crate::source::deferred;
use crate::{
    AssetPayload, DatasetHost, FetchOutcome, FetchedAsset, ItemError, ItemStream, Source,
    SourceError,
};

const CATEGORY: &str = "facades";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeItem {
    pub image: PathBuf,
    pub annotation: PathBuf,
}

impl fmt::Display for FacadeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.image.file_name().unwrap_or(self.image.as_os_str());
        write!(f, "{}", name.to_string_lossy())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Annotation {
    image_width: Option<u32>,
    image_height: Option<u32>,
}

pub struct IrfSource {
    descriptor: SourceDescriptor,
    datasets: Arc<dyn DatasetHost>,
    dataset: DatasetConfig,
}

impl IrfSource {
    pub fn new(datasets: Arc<dyn DatasetHost>, config: &IrfConfig) -> Self {
        Self {
            descriptor: SourceDescriptor::new(
                SourceKind::Irf,
                "irf_facade_image",
                "Irregular Facades Dataset (IRFs)",
                config.dataset.dataset.clone(),
            ),
            datasets,
            dataset: config.dataset.clone(),
        }
    }

    async fn list_facades(&self) -> Result<Vec<FacadeItem>, SourceError> {
        let root = prepare_dataset(self.datasets.as_ref(), &self.dataset).await?;
        let items = list_annotated_images(&root)?;
        retrieval_info!("{} annotated images found", items.len());
        Ok(items)
    }

    fn read_facade(&self, item: &FacadeItem) -> Result<FetchOutcome, ItemError> {
        let resolution = match annotated_size(&item.annotation) {
            Some(size) => size,
            None => probe_file_dimensions(&item.image)?,
        };
        let bytes = fs::read(&item.image)?;
        let stem = item
            .image
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let annotation = item
            .annotation
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut provenance = Provenance::new(stem.as_str(), dataset_page_url(&self.dataset.dataset))
            .with_info("annotation", annotation);
        provenance.categories = vec![CATEGORY.to_string()];
        provenance.resolution = Some(resolution);
        provenance.format = Some("jpg".to_string());

        Ok(FetchOutcome::Fetched(FetchedAsset {
            category_dir: CATEGORY.to_string(),
            file_stem: derive_file_stem(&stem, None),
            payload: AssetPayload::Bytes {
                bytes,
                extension: "jpg".to_string(),
            },
            companions: Vec::new(),
            provenance,
        }))
    }
}

/// `imageWidth` x `imageHeight` from the annotation, when both are present and readable.
fn annotated_size(path: &Path) -> Option<(u32, u32)> {
    let text = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Annotation>(&text) {
        Ok(Annotation {
            image_width: Some(width),
            image_height: Some(height),
        }) => Some((width, height)),
        Ok(_) => None,
        Err(err) => {
            retrieval_debug!("{}: {err}", path.display());
            None
        }
    }
}

/// `.jpg` files anywhere below `root` that have a same-named `.json` beside them, sorted by path.
pub fn list_annotated_images(root: &Path) -> Result<Vec<FacadeItem>, SourceError> {
    let mut items = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|err| SourceError::Input {
            path: err.path().unwrap_or(root).to_path_buf(),
            source: err.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_jpg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg"));
        if !is_jpg {
            continue;
        }
        let annotation = path.with_extension("json");
        if annotation.is_file() {
            items.push(FacadeItem {
                image: path.to_path_buf(),
                annotation,
            });
        }
    }
    items.sort_by(|a, b| a.image.cmp(&b.image));
    Ok(items)
}

#[async_trait::async_trait]
impl Source for IrfSource {
    type Item = FacadeItem;

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn enumerate(&self) -> ItemStream<'_, FacadeItem> {
        deferred(self.list_facades())
    }

    async fn fetch(&self, item: &FacadeItem) -> FetchOutcome {
        self.read_facade(item).unwrap_or_else(FetchOutcome::Failed)
    }
}
