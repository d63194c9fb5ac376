//! EPREL energy labels: PDF download with template fallback, first page rendered to PNG.

mod products;

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use image::{DynamicImage, ImageFormat};
use retrieval_core::{derive_file_stem, EprelConfig, Provenance, SourceDescriptor, SourceKind};
use retrieval_logging::retrieval_warn;

use crate::{
    AssetPayload, Companion, ConvertError, FetchOutcome, FetchedAsset, HttpClient, HttpRequest,
    ItemError, ItemStream, Rasterizer, Source,
};

pub(crate) struct Product {
    category: &'static str,
    id: u64,
    name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductItem {
    pub category: String,
    pub id: u64,
    pub name: String,
}

impl ProductItem {
    pub fn new(category: impl Into<String>, id: u64, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for ProductItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

pub fn product_table() -> Vec<ProductItem> {
    products::PRODUCTS
        .iter()
        .map(|p| ProductItem::new(p.category, p.id, p.name))
        .collect()
}

pub struct EprelSource {
    descriptor: SourceDescriptor,
    http: Arc<dyn HttpClient>,
    rasterizer: Arc<dyn Rasterizer>,
    base_url: String,
    templates: Vec<String>,
    products: Vec<ProductItem>,
}

impl EprelSource {
    pub fn new(
        http: Arc<dyn HttpClient>,
        rasterizer: Arc<dyn Rasterizer>,
        config: &EprelConfig,
    ) -> Self {
        Self {
            descriptor: SourceDescriptor::new(
                SourceKind::Eprel,
                "eprel_label_image",
                "European Commission EPREL",
                "eprel.ec.europa.eu",
            ),
            http,
            rasterizer,
            base_url: config.base_url.clone(),
            templates: config.label_templates.clone(),
            products: product_table(),
        }
    }

    pub fn with_products(mut self, products: Vec<ProductItem>) -> Self {
        self.products = products;
        self
    }

    /// Candidate label URLs for `item`, in the order they are tried.
    pub fn label_urls(&self, item: &ProductItem) -> Vec<String> {
        let base = self.base_url.trim_end_matches('/');
        let id = item.id.to_string();
        self.templates
            .iter()
            .map(|template| {
                let path = template
                    .replace("{category}", &item.category)
                    .replace("{id}", &id);
                format!("{base}/{path}")
            })
            .collect()
    }

    async fn fetch_label(&self, item: &ProductItem) -> Result<FetchOutcome, ItemError> {
        let urls = self.label_urls(item);
        for url in &urls {
            let response = match self.http.get(&HttpRequest::get(url)).await {
                Ok(response) => response,
                Err(err) => {
                    retrieval_warn!("{item}: {url}: {err}");
                    continue;
                }
            };
            let page = match self.first_page(&response.bytes) {
                Ok(page) => page,
                Err(err) => {
                    retrieval_warn!("{item}: unusable label from {url}: {err}");
                    continue;
                }
            };

            let mut provenance = Provenance::new(item.name.as_str(), url.as_str());
            provenance.categories = vec![item.category.clone()];
            provenance.resolution = Some((page.width(), page.height()));
            provenance.format = Some("png".to_string());

            return Ok(FetchOutcome::Fetched(FetchedAsset {
                category_dir: item.category.clone(),
                file_stem: derive_file_stem(&item.name, Some(&item.id.to_string())),
                payload: AssetPayload::Image {
                    image: page,
                    format: ImageFormat::Png,
                },
                companions: vec![Companion {
                    extension: "pdf".to_string(),
                    bytes: response.bytes,
                }],
                provenance,
            }));
        }
        Err(ItemError::TemplatesExhausted {
            attempts: urls.len(),
        })
    }

    /// Render the document through a temp file that is gone before this returns.
    fn first_page(&self, document: &[u8]) -> Result<DynamicImage, ItemError> {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile()?;
        file.write_all(document)?;
        file.flush()?;
        let pages = self.rasterizer.rasterize(file.path());
        file.close()?;
        pages?
            .into_iter()
            .next()
            .ok_or_else(|| ItemError::Convert(ConvertError::Empty))
    }
}

#[async_trait::async_trait]
impl Source for EprelSource {
    type Item = ProductItem;

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn enumerate(&self) -> ItemStream<'_, ProductItem> {
        stream::iter(self.products.iter().cloned().map(Ok)).boxed()
    }

    async fn fetch(&self, item: &ProductItem) -> FetchOutcome {
        self.fetch_label(item)
            .await
            .unwrap_or_else(FetchOutcome::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keeps_duplicates() {
        let table = product_table();
        assert_eq!(table.len(), 104);
        let water_heaters = table
            .iter()
            .filter(|p| p.category == "waterheaters" && p.id == 108766)
            .count();
        assert_eq!(water_heaters, 2);
    }
}
