//! Retrieval engine: IO boundaries, the seven sources, and the pipeline that runs them.
mod coordinator;
mod dataset;
mod decode;
mod driver;
mod feed;
mod fetch;
mod georef;
mod imaging;
mod language;
mod persist;
mod rasterize;
mod source;
mod types;

pub mod sources;

pub use coordinator::{RunCoordinator, RunReport, Services, SourceReport, SourceSlot, SourceStatus};
pub use dataset::{
    dataset_page_url, extract_archive, prepare_dataset, DatasetError, DatasetHost,
    KaggleCredentials, KaggleHost,
};
pub use decode::{decode_page, DecodeError};
pub use driver::{
    system_clock, Clock, ItemOutcome, LogSink, PipelineDriver, PipelineError, PipelineEvent,
    ProgressSink,
};
pub use feed::{parse_item_links, FeedError};
pub use fetch::{
    FetchSettings, HttpClient, HttpRequest, HttpResponse, ReqwestClient, DEFAULT_USER_AGENT,
};
pub use georef::{read_georeference, Bounds, GeoReference};
pub use imaging::{decode_image, probe_dimensions, probe_file_dimensions, url_extension, ImageInfo};
pub use language::{LanguageDetector, WhatlangDetector};
pub use persist::{ensure_output_dir, AssetWriter, AtomicFileWriter, PersistError, WrittenAsset};
pub use rasterize::{ConvertError, PdfiumRasterizer, Rasterizer};
pub use source::{ItemStream, RunnableSource, Source};
pub use types::{
    AssetPayload, Companion, FailureKind, FetchError, FetchOutcome, FetchedAsset, FilterReason,
    ItemError, SourceError,
};
