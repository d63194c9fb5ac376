//! Copernicus VHR 2021 mosaics, one export request per sub-region.

mod regions;

use std::fmt;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use retrieval_core::{derive_file_stem, CopernicusConfig, Provenance, SourceDescriptor, SourceKind};
use serde_json::json;

use crate::imaging::probe_dimensions;
use crate::{
    AssetPayload, FetchOutcome, FetchedAsset, HttpClient, HttpRequest, ItemError, ItemStream,
    Source,
};

const PROJECTION: &str = "EPSG:3035";
const SPATIAL_REFERENCE: &str = "3035";
const EXPORT_SIZE: &str = "1200,1200";
const EXPORT_FORMAT: &str = "jpg";

pub(crate) struct Country {
    name: &'static str,
    bbox: [u32; 4],
    regions: &'static [Region],
}

pub(crate) struct Region {
    name: &'static str,
    bbox: [u32; 4],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionItem {
    pub country: &'static str,
    pub region: &'static str,
    /// `[x_min, y_min, x_max, y_max]` in EPSG:3035.
    pub bbox: [u32; 4],
}

impl fmt::Display for RegionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.region, self.country)
    }
}

/// Every sub-region in table order; a country without sub-regions stands for itself.
pub fn region_table() -> Vec<RegionItem> {
    regions::COUNTRIES
        .iter()
        .flat_map(|country| {
            let own = RegionItem {
                country: country.name,
                region: country.name,
                bbox: country.bbox,
            };
            let subregions: Vec<RegionItem> = country
                .regions
                .iter()
                .map(|region| RegionItem {
                    country: country.name,
                    region: region.name,
                    bbox: region.bbox,
                })
                .collect();
            if subregions.is_empty() {
                vec![own]
            } else {
                subregions
            }
        })
        .collect()
}

pub struct CopernicusSource {
    descriptor: SourceDescriptor,
    http: Arc<dyn HttpClient>,
    export_url: String,
    regions: Vec<RegionItem>,
}

impl CopernicusSource {
    pub fn new(http: Arc<dyn HttpClient>, config: &CopernicusConfig) -> Self {
        Self {
            descriptor: SourceDescriptor::new(
                SourceKind::Copernicus,
                "copernicus_satellite_image",
                "Copernicus Land Monitoring Service",
                "land.copernicus.eu",
            ),
            http,
            export_url: config.export_url.clone(),
            regions: region_table(),
        }
    }

    pub fn with_regions(mut self, regions: Vec<RegionItem>) -> Self {
        self.regions = regions;
        self
    }

    async fn export_region(&self, item: &RegionItem) -> Result<FetchOutcome, ItemError> {
        let [x_min, y_min, x_max, y_max] = item.bbox;
        let request = HttpRequest::get(&self.export_url)
            .param("bbox", format!("{x_min},{y_min},{x_max},{y_max}"))
            .param("bboxSR", SPATIAL_REFERENCE)
            .param("imageSR", SPATIAL_REFERENCE)
            .param("size", EXPORT_SIZE)
            .param("format", EXPORT_FORMAT)
            .param("f", "image");
        let response = self.http.get(&request).await?;
        // The server answers some errors with a 200 JSON body.
        let resolution = probe_dimensions(&response.bytes)?;

        let mut provenance = Provenance::new(
            format!("Copernicus VHR 2021 - {}", item.region),
            response.final_url,
        )
        .with_info(
            "bbox",
            json!({ "x_min": x_min, "y_min": y_min, "x_max": x_max, "y_max": y_max }),
        )
        .with_info("projection", PROJECTION)
        .with_info("country", item.country)
        .with_info("region", item.region);
        provenance.categories = vec![item.country.to_string()];
        provenance.resolution = Some(resolution);
        provenance.format = Some(EXPORT_FORMAT.to_string());

        Ok(FetchOutcome::Fetched(FetchedAsset {
            category_dir: item.country.to_string(),
            file_stem: derive_file_stem(item.region, None),
            payload: AssetPayload::Bytes {
                bytes: response.bytes,
                extension: EXPORT_FORMAT.to_string(),
            },
            companions: Vec::new(),
            provenance,
        }))
    }
}

#[async_trait::async_trait]
impl Source for CopernicusSource {
    type Item = RegionItem;

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn enumerate(&self) -> ItemStream<'_, RegionItem> {
        stream::iter(self.regions.iter().cloned().map(Ok)).boxed()
    }

    async fn fetch(&self, item: &RegionItem) -> FetchOutcome {
        self.export_region(item)
            .await
            .unwrap_or_else(FetchOutcome::Failed)
    }
}
