//! Figures of pre-scraped Wikipedia articles listed in a JSONL file.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use retrieval_core::{
    derive_file_stem, short_hash, Provenance, SourceDescriptor, SourceKind, WikipediaConfig,
};
use retrieval_logging::{retrieval_debug, retrieval_info, retrieval_warn};
use scraper::{Html, Selector};
use serde::Deserialize;

use crate::decode::decode_page;
use crate::imaging::{decode_image, url_extension, url_file_stem};
use crate::{
    AssetPayload, FetchOutcome, FetchedAsset, HttpClient, HttpRequest, ItemError, ItemStream,
    Source, SourceError,
};

const FIGURE_SELECTOR: &str = ".mw-parser-output figure, .mw-parser-output div.thumb";

/// One line of the article list. Extra keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleRef {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureImage {
    pub article_title: String,
    pub article_url: String,
    pub image_url: String,
    pub caption: String,
}

impl fmt::Display for FigureImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.article_title, self.image_url)
    }
}

/// Parse the JSONL article list; blank lines are skipped, anything else malformed is an error.
pub fn read_articles(path: &Path) -> Result<Vec<ArticleRef>, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|err| SourceError::MalformedInput {
                path: path.to_path_buf(),
                line: index + 1,
                message: err.to_string(),
            })
        })
        .collect()
}

/// `(absolute image url, caption)` for every figure with an image, in page order.
pub fn parse_figures(html: &str, page_url: &str) -> Vec<(String, String)> {
    let Ok(base) = url::Url::parse(page_url) else {
        return Vec::new();
    };
    let (Ok(figures), Ok(img), Ok(caption_sel)) = (
        Selector::parse(FIGURE_SELECTOR),
        Selector::parse("img[src]"),
        Selector::parse("figcaption, div.thumbcaption"),
    ) else {
        return Vec::new();
    };

    let doc = Html::parse_document(html);
    doc.select(&figures)
        .filter_map(|figure| {
            let src = figure.select(&img).next()?.value().attr("src")?;
            let image_url = base.join(src.trim()).ok()?;
            let caption = figure
                .select(&caption_sel)
                .next()
                .map(|c| c.text().collect::<String>().trim().to_string())
                .unwrap_or_default();
            Some((image_url.to_string(), caption))
        })
        .collect()
}

pub struct WikipediaSource {
    descriptor: SourceDescriptor,
    http: Arc<dyn HttpClient>,
    input: PathBuf,
}

impl WikipediaSource {
    pub fn new(http: Arc<dyn HttpClient>, config: &WikipediaConfig) -> Self {
        Self {
            descriptor: SourceDescriptor::new(
                SourceKind::Wikipedia,
                "wikipedia_article_image",
                "Wikipedia",
                "en.wikipedia.org",
            ),
            http,
            input: config.input.clone(),
        }
    }

    /// Figures of one article; a page that cannot be fetched is logged and yields nothing.
    async fn article_figures(&self, article: ArticleRef) -> Vec<FigureImage> {
        let response = match self.http.get(&HttpRequest::get(&article.url)).await {
            Ok(response) => response,
            Err(err) => {
                retrieval_warn!("article {:?} ({}): {err}", article.title, article.url);
                return Vec::new();
            }
        };
        let html = match decode_page(&response.bytes, response.content_type.as_deref()) {
            Ok(html) => html,
            Err(err) => {
                retrieval_warn!("article {:?}: {err}", article.title);
                return Vec::new();
            }
        };
        let figures = parse_figures(&html, &response.final_url);
        retrieval_debug!("article {:?}: {} figures", article.title, figures.len());
        figures
            .into_iter()
            .map(|(image_url, caption)| FigureImage {
                article_title: article.title.clone(),
                article_url: article.url.clone(),
                image_url,
                caption,
            })
            .collect()
    }

    async fn fetch_figure(&self, item: &FigureImage) -> Result<FetchOutcome, ItemError> {
        let response = self.http.get(&HttpRequest::get(&item.image_url)).await?;
        let info = decode_image(&response.bytes)?;
        let extension = url_extension(&item.image_url).unwrap_or_else(|| {
            info.format
                .extensions_str()
                .first()
                .copied()
                .unwrap_or("img")
                .to_string()
        });
        let image_stem =
            url_file_stem(&item.image_url).unwrap_or_else(|| short_hash(&item.image_url));

        let mut provenance = Provenance::new(item.article_title.as_str(), item.image_url.as_str())
            .with_info("caption", item.caption.as_str())
            .with_info("article_url", item.article_url.as_str());
        provenance.categories = vec![item.article_title.clone()];
        provenance.resolution = Some((info.width, info.height));
        provenance.format = Some(extension.clone());

        Ok(FetchOutcome::Fetched(FetchedAsset {
            category_dir: item.article_title.clone(),
            file_stem: derive_file_stem(&item.article_title, Some(&image_stem)),
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
impl Source for WikipediaSource {
    type Item = FigureImage;

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    /// The article list is read up front; article pages are fetched as the driver pulls.
    fn enumerate(&self) -> ItemStream<'_, FigureImage> {
        let articles = match read_articles(&self.input) {
            Ok(articles) => articles,
            Err(err) => return stream::iter(vec![Err(err)]).boxed(),
        };
        retrieval_info!("{} articles in {}", articles.len(), self.input.display());
        stream::iter(articles)
            .then(move |article| self.article_figures(article))
            .flat_map(|figures| stream::iter(figures.into_iter().map(Ok)))
            .boxed()
    }

    async fn fetch(&self, item: &FigureImage) -> FetchOutcome {
        self.fetch_figure(item)
            .await
            .unwrap_or_else(FetchOutcome::Failed)
    }
}
