//! Retrieval core: pure types shared by the engine and the binary.
//!
//! Nothing in this crate performs IO. Dates are passed in by the caller.
mod config;
mod filename;
mod filters;
mod metadata;
mod result;
mod source;

pub use config::{
    ConfigError, CopernicusConfig, DatasetConfig, EprelConfig, InriaConfig, IrfConfig, NasaConfig,
    RunConfig, WikimediaConfig, WikipediaConfig, DEFAULT_OUTPUT_ROOT, DEFAULT_WIKI_INPUT,
    EPREL_LABEL_TEMPLATES, INRIA_CITIES, NASA_TOPICS, WIKIMEDIA_CATEGORIES,
};
pub use filename::{derive_file_stem, sanitize_component, short_hash};
pub use filters::{cutoff_date, is_english, is_image_mime, matching_topics, passes_cutoff, ENGLISH};
pub use metadata::{build_metadata, MetadataRecord, Provenance, SourceRecord, RETRIEVED_DATE_FORMAT};
pub use result::PipelineResult;
pub use source::{SourceDescriptor, SourceKind};
