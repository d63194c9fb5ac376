//! NASA Earth Observatory: RSS feeds, article pages, hi-res images.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use futures_util::future;
use futures_util::stream::{self, StreamExt};
use retrieval_core::{
    cutoff_date, derive_file_stem, matching_topics, passes_cutoff, short_hash, NasaConfig,
    Provenance, SourceDescriptor, SourceKind,
};
use retrieval_logging::{retrieval_debug, retrieval_warn};
use scraper::{Html, Selector};

use crate::decode::decode_page;
use crate::driver::Clock;
use crate::feed::parse_item_links;
use crate::imaging::{decode_image, url_extension};
use crate::{
    AssetPayload, FailureKind, FetchError, FetchOutcome, FetchedAsset, FilterReason, HttpClient,
    HttpRequest, ItemError, ItemStream, Source,
};

const PUBLISHED_MARKER: &str = "Published";
const PUBLISHED_FORMAT: &str = "%b %d, %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLink {
    pub url: String,
}

impl fmt::Display for ArticleLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// What an article page says about its image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticlePage {
    pub title: String,
    /// `None` when the page has no parsable publication line.
    pub published: Option<NaiveDate>,
    pub topic_tags: Vec<String>,
    pub image_href: Option<String>,
    pub caption: String,
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn element_text(element: scraper::ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn parse_article(html: &str) -> ArticlePage {
    let doc = Html::parse_document(html);

    let title = selector("h1")
        .and_then(|sel| doc.select(&sel).next().map(element_text))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| "untitled".to_string());

    let published = selector("p").and_then(|sel| {
        doc.select(&sel)
            .map(element_text)
            .find(|text| text.contains(PUBLISHED_MARKER))
            .and_then(|text| {
                let date = text.replace(PUBLISHED_MARKER, "");
                NaiveDate::parse_from_str(date.trim(), PUBLISHED_FORMAT).ok()
            })
    });

    let topic_tags = selector(r#"a[href*="/topic/"]"#)
        .map(|sel| doc.select(&sel).map(element_text).collect())
        .unwrap_or_default();

    let image_href = selector("a[href]").and_then(|sel| {
        doc.select(&sel)
            .find(|a| matches!(element_text(*a).as_str(), "JPEG" | "PNG"))
            .and_then(|a| a.value().attr("href"))
            .map(|href| href.trim().to_string())
    });

    let caption = selector("img[alt]")
        .and_then(|sel| doc.select(&sel).next())
        .and_then(|img| img.value().attr("alt"))
        .unwrap_or_default()
        .to_string();

    ArticlePage {
        title,
        published,
        topic_tags,
        image_href,
        caption,
    }
}

/// Numeric article id from a path such as `/images/152001/heat-dome`.
pub fn article_identity(article_url: &str) -> String {
    url::Url::parse(article_url)
        .ok()
        .and_then(|url| {
            url.path_segments().and_then(|mut segments| {
                segments
                    .find(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| short_hash(article_url))
}

pub struct NasaSource {
    descriptor: SourceDescriptor,
    http: Arc<dyn HttpClient>,
    today: Clock,
    feeds: Vec<String>,
    topics: Vec<String>,
    cutoff_years: u32,
}

impl NasaSource {
    pub fn new(http: Arc<dyn HttpClient>, today: Clock, config: &NasaConfig) -> Self {
        Self {
            descriptor: SourceDescriptor::new(
                SourceKind::Nasa,
                "nasa_earth_observatory_image",
                "NASA",
                "earthobservatory.nasa.gov",
            ),
            http,
            today,
            feeds: config.feeds.clone(),
            topics: config.topics.clone(),
            cutoff_years: config.cutoff_years,
        }
    }

    /// Item links of one feed; an unreachable or malformed feed contributes nothing.
    async fn read_feed(&self, feed: &str) -> Vec<String> {
        let response = match self.http.get(&HttpRequest::get(feed)).await {
            Ok(response) => response,
            Err(err) => {
                retrieval_warn!("feed {feed} unavailable: {err}");
                return Vec::new();
            }
        };
        match parse_item_links(&String::from_utf8_lossy(&response.bytes)) {
            Ok(links) => {
                retrieval_debug!("feed {feed}: {} entries", links.len());
                links
            }
            Err(err) => {
                retrieval_warn!("feed {feed}: {err}");
                Vec::new()
            }
        }
    }

    async fn fetch_article(&self, item: &ArticleLink) -> Result<FetchOutcome, ItemError> {
        let response = self.http.get(&HttpRequest::get(&item.url)).await?;
        let html = decode_page(&response.bytes, response.content_type.as_deref())
            .map_err(|err| ItemError::Decode(err.to_string()))?;
        let page = parse_article(&html);

        let today = (self.today)();
        let published = page.published.unwrap_or(today);
        if !passes_cutoff(published, cutoff_date(today, self.cutoff_years)) {
            return Ok(FetchOutcome::Filtered(FilterReason::TooOld { published }));
        }

        let topics = matching_topics(page.topic_tags.iter().map(String::as_str), &self.topics);
        if topics.is_empty() {
            return Ok(FetchOutcome::Filtered(FilterReason::OffTopic));
        }

        let href = page.image_href.ok_or_else(|| {
            ItemError::Missing(format!("no high-resolution image link for {:?}", page.title))
        })?;
        let image_url = url::Url::parse(&response.final_url)
            .and_then(|base| base.join(&href))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, format!("{href}: {err}")))?
            .to_string();

        let image = self.http.get(&HttpRequest::get(&image_url)).await?;
        let info = decode_image(&image.bytes)?;
        let extension = url_extension(&image_url).unwrap_or_else(|| {
            info.format
                .extensions_str()
                .first()
                .copied()
                .unwrap_or("jpg")
                .to_string()
        });

        let categories: Vec<String> = topics.into_iter().collect();
        let mut provenance = Provenance::new(page.title.as_str(), image_url.as_str())
            .with_info("caption", page.caption)
            .with_info("article_url", item.url.as_str());
        provenance.categories = categories.clone();
        provenance.resolution = Some((info.width, info.height));
        provenance.format = Some(extension.clone());

        Ok(FetchOutcome::Fetched(FetchedAsset {
            category_dir: categories.join("_"),
            file_stem: derive_file_stem(&page.title, Some(&article_identity(&item.url))),
            payload: AssetPayload::Bytes {
                bytes: image.bytes,
                extension,
            },
            companions: Vec::new(),
            provenance,
        }))
    }
}

#[async_trait::async_trait]
impl Source for NasaSource {
    type Item = ArticleLink;

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    /// Feeds are read one at a time as the driver pulls; links repeated across feeds are dropped.
    fn enumerate(&self) -> ItemStream<'_, ArticleLink> {
        let mut seen = HashSet::new();
        stream::iter(self.feeds.iter())
            .then(move |feed| self.read_feed(feed))
            .flat_map(stream::iter)
            .filter(move |link| future::ready(seen.insert(link.clone())))
            .map(|url| Ok(ArticleLink { url }))
            .boxed()
    }

    async fn fetch(&self, item: &ArticleLink) -> FetchOutcome {
        self.fetch_article(item)
            .await
            .unwrap_or_else(FetchOutcome::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = r#"<html><body>
        <h1> Heat Dome  over Europe </h1>
        <p>By the Earth Observatory team</p>
        <p>Published Jul 19, 2023</p>
        <a href="/topic/heat">Heat</a>
        <a href="/topic/water">Water</a>
        <a href="/images/151600/thumb.jpg">thumbnail</a>
        <a href="https://eoimages.example/151600/europe_heat.jpg">JPEG</a>
        <img src="x.jpg" alt="Land surface temperatures">
    </body></html>"#;

    #[test]
    fn article_fields_are_extracted() {
        let page = parse_article(ARTICLE);
        assert_eq!(page.title, "Heat Dome over Europe");
        assert_eq!(page.published, NaiveDate::from_ymd_opt(2023, 7, 19));
        assert_eq!(page.topic_tags, vec!["Heat".to_string(), "Water".to_string()]);
        assert_eq!(
            page.image_href.as_deref(),
            Some("https://eoimages.example/151600/europe_heat.jpg")
        );
        assert_eq!(page.caption, "Land surface temperatures");
    }

    #[test]
    fn missing_fields_fall_back() {
        let page = parse_article("<html><body><p>Published sometime</p></body></html>");
        assert_eq!(page.title, "untitled");
        assert_eq!(page.published, None);
        assert!(page.topic_tags.is_empty());
        assert_eq!(page.image_href, None);
        assert_eq!(page.caption, "");
    }

    #[test]
    fn identity_prefers_numeric_segment() {
        assert_eq!(
            article_identity("https://earthobservatory.nasa.gov/images/152001/heat-dome"),
            "152001"
        );
        let hashed = article_identity("https://earthobservatory.nasa.gov/features/heat");
        assert_eq!(hashed.len(), 8);
    }
}
