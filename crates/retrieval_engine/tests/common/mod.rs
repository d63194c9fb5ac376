#![allow(dead_code)]

use std::fmt;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use futures_util::stream::{self, StreamExt};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use retrieval_core::{Provenance, SourceDescriptor, SourceKind};
use retrieval_engine::{
    AssetPayload, AssetWriter, Clock, ConvertError, DatasetError, DatasetHost, FetchOutcome,
    FetchSettings, FetchedAsset, HttpClient, ItemError, ItemStream, LanguageDetector,
    PipelineDriver, PipelineEvent, ProgressSink, Rasterizer, ReqwestClient, Source, SourceError,
};
use walkdir::WalkDir;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn fixed_clock() -> Clock {
    let date = today();
    Arc::new(move || date)
}

pub fn http() -> Arc<dyn HttpClient> {
    Arc::new(ReqwestClient::new(FetchSettings::default()).unwrap())
}

pub fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).unwrap();
    out.into_inner()
}

pub fn solid(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([20, 120, 200])))
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(solid(width, height), ImageFormat::Png)
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(solid(width, height), ImageFormat::Jpeg)
}

/// RGB GeoTIFF whose top-left corner sits at `origin` in the given EPSG grid.
pub fn geotiff_bytes(width: u32, height: u32, epsg: u16, origin: (f64, f64), pixel: f64) -> Vec<u8> {
    use tiff::encoder::{colortype, TiffEncoder};
    use tiff::tags::Tag;

    let mut out = Cursor::new(Vec::new());
    {
        let mut encoder = TiffEncoder::new(&mut out).unwrap();
        let mut image = encoder.new_image::<colortype::RGB8>(width, height).unwrap();
        image
            .encoder()
            .write_tag(Tag::ModelPixelScaleTag, &[pixel, pixel, 0.0][..])
            .unwrap();
        image
            .encoder()
            .write_tag(Tag::ModelTiepointTag, &[0.0, 0.0, 0.0, origin.0, origin.1, 0.0][..])
            .unwrap();
        image
            .encoder()
            .write_tag(Tag::GeoKeyDirectoryTag, &[1u16, 1, 0, 2, 1024, 0, 1, 1, 3072, 0, 1, epsg][..])
            .unwrap();
        let pixels = vec![90u8; (width * height * 3) as usize];
        image.write_data(&pixels).unwrap();
    }
    out.into_inner()
}

/// Relative paths of every file below `root`, sorted, with `/` separators.
pub fn files_under(root: &Path) -> Vec<String> {
    if !root.exists() {
        return Vec::new();
    }
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}

pub fn write_zip(path: &Path, entries: &[(&str, Vec<u8>)]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, bytes) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap();
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingSink {
    pub fn take(&self) -> Vec<PipelineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for RecordingSink {
    fn emit(&self, event: PipelineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn driver(root: &Path, cap: Option<usize>) -> PipelineDriver {
    driver_with_sink(root, cap, Arc::new(RecordingSink::default()))
}

pub fn driver_with_sink(
    root: &Path,
    cap: Option<usize>,
    sink: Arc<dyn ProgressSink>,
) -> PipelineDriver {
    retrieval_logging::initialize_for_tests();
    PipelineDriver::new(AssetWriter::new(root.to_path_buf()), cap, fixed_clock(), sink)
}

/// Returns the same rendered page for every document and remembers what it was given.
pub struct FakeRasterizer {
    page: DynamicImage,
    fail: bool,
    seen: Mutex<Vec<PathBuf>>,
}

impl FakeRasterizer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            page: solid(width, height),
            fail: false,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(1, 1)
        }
    }

    pub fn seen(&self) -> Vec<PathBuf> {
        self.seen.lock().unwrap().clone()
    }
}

impl Rasterizer for FakeRasterizer {
    fn rasterize(&self, path: &Path) -> Result<Vec<DynamicImage>, ConvertError> {
        assert!(path.is_file(), "document should exist while rendering");
        self.seen.lock().unwrap().push(path.to_path_buf());
        if self.fail {
            return Err(ConvertError::Render("broken document".to_string()));
        }
        Ok(vec![self.page.clone()])
    }
}

/// Reports German for texts containing any of the given words, English otherwise.
pub struct KeywordLanguage {
    foreign: Vec<&'static str>,
}

impl KeywordLanguage {
    pub fn new(foreign: &[&'static str]) -> Self {
        Self {
            foreign: foreign.to_vec(),
        }
    }
}

impl LanguageDetector for KeywordLanguage {
    fn detect(&self, text: &str) -> Option<String> {
        if self.foreign.iter().any(|word| text.contains(word)) {
            Some("deu".to_string())
        } else {
            Some("eng".to_string())
        }
    }
}

/// Copies a prepared archive into the download directory, like a completed download.
pub struct CopyHost {
    archive: PathBuf,
    calls: AtomicUsize,
}

impl CopyHost {
    pub fn new(archive: PathBuf) -> Self {
        Self {
            archive,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DatasetHost for CopyHost {
    async fn fetch_archive(
        &self,
        dataset: &str,
        download_dir: &Path,
    ) -> Result<PathBuf, DatasetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        fs::create_dir_all(download_dir)?;
        let slug = dataset.rsplit('/').next().unwrap_or(dataset);
        let dest = download_dir.join(format!("{slug}.zip"));
        fs::copy(&self.archive, &dest)?;
        Ok(dest)
    }
}

/// Fails every download, as a host without credentials would.
pub struct OfflineHost;

#[async_trait::async_trait]
impl DatasetHost for OfflineHost {
    async fn fetch_archive(&self, dataset: &str, _: &Path) -> Result<PathBuf, DatasetError> {
        Err(DatasetError::Credentials(format!("offline, cannot fetch {dataset}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Image,
    Filtered,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ScriptedItem {
    pub name: String,
    pub step: Step,
}

impl fmt::Display for ScriptedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// In-memory source whose items succeed, filter or fail as scripted.
pub struct ScriptedSource {
    descriptor: SourceDescriptor,
    items: Vec<ScriptedItem>,
    listing_error_after: Option<usize>,
    fetches: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(kind: SourceKind, steps: &[(&str, Step)]) -> Self {
        Self {
            descriptor: SourceDescriptor::new(kind, "test_image", "Test Provider", "test.example"),
            items: steps
                .iter()
                .map(|(name, step)| ScriptedItem {
                    name: name.to_string(),
                    step: *step,
                })
                .collect(),
            listing_error_after: None,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Enumeration yields `count` items and then a listing error.
    pub fn listing_error_after(mut self, count: usize) -> Self {
        self.listing_error_after = Some(count);
        self
    }

    pub fn fetch_counter(&self) -> Arc<AtomicUsize> {
        self.fetches.clone()
    }
}

#[async_trait::async_trait]
impl Source for ScriptedSource {
    type Item = ScriptedItem;

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn enumerate(&self) -> ItemStream<'_, ScriptedItem> {
        let mut listed: Vec<Result<ScriptedItem, SourceError>> = match self.listing_error_after {
            Some(count) => self.items.iter().take(count).cloned().map(Ok).collect(),
            None => self.items.iter().cloned().map(Ok).collect(),
        };
        if self.listing_error_after.is_some() {
            listed.push(Err(SourceError::ListingFormat("listing broke".to_string())));
        }
        stream::iter(listed).boxed()
    }

    async fn fetch(&self, item: &ScriptedItem) -> FetchOutcome {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match item.step {
            Step::Image => FetchOutcome::Fetched(FetchedAsset {
                category_dir: "things".to_string(),
                file_stem: item.name.clone(),
                payload: AssetPayload::Bytes {
                    bytes: png_bytes(2, 2),
                    extension: "png".to_string(),
                },
                companions: Vec::new(),
                provenance: Provenance::new(
                    item.name.as_str(),
                    format!("https://test.example/{}", item.name),
                ),
            }),
            Step::Filtered => FetchOutcome::Filtered(retrieval_engine::FilterReason::OffTopic),
            Step::Failed => FetchOutcome::Failed(ItemError::Missing(format!(
                "{} is not available",
                item.name
            ))),
        }
    }
}
