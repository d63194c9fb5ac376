//! INRIA aerial image labeling dataset, filtered by city.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use retrieval_core::{derive_file_stem, DatasetConfig, InriaConfig, Provenance, SourceDescriptor, SourceKind};
use retrieval_logging::{retrieval_debug, retrieval_info, retrieval_warn};

use crate::dataset::{dataset_page_url, prepare_dataset};
use crate::georef::{read_georeference, GeoReference};
use crate::imaging::probe_file_dimensions;
use crate::source::deferred;
use crate::{
    AssetPayload, DatasetHost, FetchOutcome, FetchedAsset, ItemError, ItemStream, Source,
    SourceError,
};

const IMAGE_DIRS: [&str; 2] = [
    "AerialImageDataset/train/images",
    "AerialImageDataset/test/images",
];

struct City {
    key: &'static str,
    name: &'static str,
    country: &'static str,
}

/// File-name prefix, display name and country of every city in the dataset.
const CITIES: [City; 10] = [
    City { key: "austin", name: "Austin", country: "USA" },
    City { key: "chicago", name: "Chicago", country: "USA" },
    City { key: "kitsap", name: "Kitsap", country: "USA" },
    City { key: "bellingham", name: "Bellingham", country: "USA" },
    City { key: "bloomington", name: "Bloomington", country: "USA" },
    City { key: "sanfrancisco", name: "San Francisco", country: "USA" },
    City { key: "vienna", name: "Vienna", country: "Austria" },
    City { key: "innsbruck", name: "Innsbruck", country: "Austria" },
    City { key: "tyrol-w", name: "Western Tyrol", country: "Austria" },
    City { key: "tyrol-e", name: "Eastern Tyrol", country: "Austria" },
];

/// File-name key for a configured city name; unknown names are lower-cased with spaces removed.
pub fn city_key(name: &str) -> String {
    CITIES
        .iter()
        .find(|city| city.name.eq_ignore_ascii_case(name.trim()) || city.key == name.trim())
        .map(|city| city.key.to_string())
        .unwrap_or_else(|| name.trim().to_lowercase().replace(' ', ""))
}

fn city_for_key(key: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.key == key)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileItem {
    pub path: PathBuf,
    pub city_key: String,
}

impl fmt::Display for TileItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.path.file_name().unwrap_or(self.path.as_os_str());
        write!(f, "{}", name.to_string_lossy())
    }
}

pub struct InriaSource {
    descriptor: SourceDescriptor,
    datasets: Arc<dyn DatasetHost>,
    dataset: DatasetConfig,
    city_keys: Vec<String>,
}

impl InriaSource {
    pub fn new(datasets: Arc<dyn DatasetHost>, config: &InriaConfig) -> Self {
        Self {
            descriptor: SourceDescriptor::new(
                SourceKind::Inria,
                "inria_aerial_image",
                "Inria",
                config.dataset.dataset.clone(),
            ),
            datasets,
            dataset: config.dataset.clone(),
            city_keys: config.cities.iter().map(|name| city_key(name)).collect(),
        }
    }

    async fn list_tiles(&self) -> Result<Vec<TileItem>, SourceError> {
        let root = prepare_dataset(self.datasets.as_ref(), &self.dataset).await?;
        let tiles = list_city_tiles(&root, &self.city_keys)?;
        retrieval_info!("{} tiles match the configured cities", tiles.len());
        Ok(tiles)
    }

    fn read_tile(&self, item: &TileItem) -> Result<FetchOutcome, ItemError> {
        let resolution = probe_file_dimensions(&item.path)?;
        let bytes = fs::read(&item.path)?;
        let stem = file_stem(&item.path);
        let extension = item
            .path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "tif".to_string());
        let (city, country) = match city_for_key(&item.city_key) {
            Some(city) => (city.name.to_string(), city.country),
            None => (item.city_key.clone(), "Unknown"),
        };

        let mut provenance = Provenance::new(stem.as_str(), dataset_page_url(&self.dataset.dataset))
            .with_info("city", city.as_str())
            .with_info("country", country)
            .with_info("file_name", item.to_string());
        match read_georeference(&item.path) {
            Ok(Some(geo)) => provenance = with_georeference(provenance, &geo),
            Ok(None) => retrieval_debug!("{item} has no model tags"),
            Err(err) => retrieval_debug!("no georeferencing for {item}: {err}"),
        }
        provenance.categories = vec![city.clone()];
        provenance.resolution = Some(resolution);
        provenance.format = Some(extension.clone());

        Ok(FetchOutcome::Fetched(FetchedAsset {
            category_dir: city,
            file_stem: derive_file_stem(&stem, None),
            payload: AssetPayload::Bytes { bytes, extension },
            companions: Vec::new(),
            provenance,
        }))
    }
}

/// Pixel size, CRS and bounds, both in the native grid and in WGS 84 degrees.
fn with_georeference(provenance: Provenance, geo: &GeoReference) -> Provenance {
    let mut provenance = provenance
        .with_info("pixel_size", format!("{:.2} m/pixel", geo.pixel_size.0))
        .with_info("image_size", format!("{}x{} px", geo.width, geo.height));
    if let Some(crs) = geo.crs() {
        provenance = provenance.with_info("crs", crs);
    }
    provenance = provenance.with_info("bounds_original_crs", geo.bounds.to_json());
    if let Some(latlon) = geo.bounds_latlon() {
        provenance = provenance.with_info("bounds_latlon", latlon.to_json());
    }
    provenance
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Tiles under the train and test image directories whose city key is wanted.
/// Each directory is listed in path order; missing directories are skipped.
pub fn list_city_tiles(root: &Path, city_keys: &[String]) -> Result<Vec<TileItem>, SourceError> {
    let mut tiles = Vec::new();
    for sub in IMAGE_DIRS {
        let dir = root.join(sub);
        if !dir.is_dir() {
            retrieval_warn!("directory not found: {}", dir.display());
            continue;
        }
        let entries = fs::read_dir(&dir).map_err(|source| SourceError::Input {
            path: dir.clone(),
            source,
        })?;
        let mut found = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| SourceError::Input {
                    path: dir.clone(),
                    source,
                })?
                .path();
            if !path.is_file() {
                continue;
            }
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let prefix = name.split('.').next().unwrap_or_default();
            let key = prefix.trim_end_matches(|c: char| c.is_ascii_digit());
            if city_keys.iter().any(|wanted| wanted == key) {
                found.push(TileItem {
                    city_key: key.to_string(),
                    path,
                });
            }
        }
        found.sort_by(|a, b| a.path.cmp(&b.path));
        tiles.extend(found);
    }
    Ok(tiles)
}

#[async_trait::async_trait]
impl Source for InriaSource {
    type Item = TileItem;

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn enumerate(&self) -> ItemStream<'_, TileItem> {
        deferred(self.list_tiles())
    }

    async fn fetch(&self, item: &TileItem) -> FetchOutcome {
        self.read_tile(item).unwrap_or_else(FetchOutcome::Failed)
    }
}
