//! Wikimedia Commons category members, filtered by title language and media type.

use std::fmt;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use retrieval_core::{
    derive_file_stem, is_english, is_image_mime, Provenance, SourceDescriptor, SourceKind,
    WikimediaConfig,
};
use retrieval_logging::retrieval_info;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::imaging::url_extension;
use crate::{
    AssetPayload, FetchOutcome, FetchedAsset, FilterReason, HttpClient, HttpRequest, ItemError,
    ItemStream, LanguageDetector, Source, SourceError,
};

const DEFAULT_EXTENSION: &str = "jpg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonsFile {
    pub category: String,
    pub page_id: u64,
    /// Raw commons title, e.g. `File:Wind_farm.jpg`.
    pub title: String,
    pub info: Option<CommonsImageInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommonsImageInfo {
    pub url: String,
    #[serde(default)]
    pub mime: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl fmt::Display for CommonsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.category)
    }
}

/// Commons title without the `File:` prefix, with `_` and `-` read as spaces.
pub fn readable_title(title: &str) -> String {
    title.replace("File:", "").replace(['_', '-'], " ")
}

/// Title without its trailing file extension. Commons titles may contain `/`,
/// so this does not go through `Path`.
pub fn title_stem(title: &str) -> &str {
    match title.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty() && !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            stem
        }
        _ => title,
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    pages: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    pageid: u64,
    title: String,
    #[serde(default)]
    imageinfo: Vec<CommonsImageInfo>,
}

/// Pages of a category-members search in response order.
pub fn parse_search(category: &str, body: &[u8]) -> Result<Vec<CommonsFile>, SourceError> {
    let response: SearchResponse = serde_json::from_slice(body)
        .map_err(|err| SourceError::ListingFormat(format!("category {category:?}: {err}")))?;
    let Some(query) = response.query else {
        return Ok(Vec::new());
    };
    query
        .pages
        .into_iter()
        .map(|(_, page)| -> Result<CommonsFile, SourceError> {
            let page: SearchPage = serde_json::from_value(page).map_err(|err| {
                SourceError::ListingFormat(format!("category {category:?}: {err}"))
            })?;
            Ok(CommonsFile {
                category: category.to_string(),
                page_id: page.pageid,
                title: page.title,
                info: page.imageinfo.into_iter().next(),
            })
        })
        .collect()
}

pub struct WikimediaSource {
    descriptor: SourceDescriptor,
    http: Arc<dyn HttpClient>,
    language: Arc<dyn LanguageDetector>,
    api_url: String,
    categories: Vec<String>,
    per_category_limit: usize,
}

impl WikimediaSource {
    pub fn new(
        http: Arc<dyn HttpClient>,
        language: Arc<dyn LanguageDetector>,
        config: &WikimediaConfig,
    ) -> Self {
        Self {
            descriptor: SourceDescriptor::new(
                SourceKind::Wikimedia,
                "wikimedia_commons",
                "Wikimedia Commons",
                "commons.wikimedia.org",
            ),
            http,
            language,
            api_url: config.api_url.clone(),
            categories: config.categories.clone(),
            per_category_limit: config.per_category_limit,
        }
    }

    async fn search(&self, category: &str) -> Result<Vec<CommonsFile>, SourceError> {
        let request = HttpRequest::get(&self.api_url)
            .param("action", "query")
            .param("generator", "categorymembers")
            .param("gcmtitle", format!("Category:{category}"))
            .param("gcmtype", "file")
            .param("gcmlimit", self.per_category_limit.to_string())
            .param("prop", "imageinfo")
            .param("iiprop", "url|size|mime")
            .param("format", "json");
        let response = self.http.get(&request).await?;
        let files = parse_search(category, &response.bytes)?;
        retrieval_info!("category {category:?}: {} files listed", files.len());
        Ok(files)
    }

    async fn fetch_file(&self, item: &CommonsFile) -> Result<FetchOutcome, ItemError> {
        let title = readable_title(&item.title);
        if !is_english(self.language.detect(&title).as_deref()) {
            return Ok(FetchOutcome::Filtered(FilterReason::NotEnglish { title }));
        }
        let info = item
            .info
            .as_ref()
            .ok_or_else(|| ItemError::Missing(format!("no image info for {}", item.title)))?;
        if !is_image_mime(&info.mime) {
            return Ok(FetchOutcome::Filtered(FilterReason::NotImage {
                mime: info.mime.clone(),
            }));
        }

        let extension = url_extension(&info.url).unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let response = self.http.get(&HttpRequest::get(&info.url)).await?;

        let mut provenance = Provenance::new(title.as_str(), info.url.as_str());
        provenance.categories = vec![item.category.clone()];
        provenance.resolution = info.width.zip(info.height);
        provenance.format = Some(info.mime.clone());

        Ok(FetchOutcome::Fetched(FetchedAsset {
            category_dir: item.category.clone(),
            file_stem: derive_file_stem(title_stem(&title), Some(&item.page_id.to_string())),
            payload: AssetPayload::Bytes {
                bytes: response.bytes,
                extension,
            },
            companions: Vec::new(),
            provenance,
        }))
    }
}

#[async_trait::async_trait]
impl Source for WikimediaSource {
    type Item = CommonsFile;

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    /// One search per category, issued only when the previous category is used up.
    fn enumerate(&self) -> ItemStream<'_, CommonsFile> {
        stream::iter(self.categories.iter())
            .then(move |category| self.search(category))
            .flat_map(|listed| {
                let items: Vec<Result<CommonsFile, SourceError>> = match listed {
                    Ok(files) => files.into_iter().map(Ok).collect(),
                    Err(err) => vec![Err(err)],
                };
                stream::iter(items)
            })
            .boxed()
    }

    async fn fetch(&self, item: &CommonsFile) -> FetchOutcome {
        self.fetch_file(item)
            .await
            .unwrap_or_else(FetchOutcome::Failed)
    }
}
