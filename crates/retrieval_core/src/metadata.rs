use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::SourceDescriptor;

pub const RETRIEVED_DATE_FORMAT: &str = "%Y-%m-%d";

/// JSON sidecar written next to every persisted asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub title: String,
    pub url: String,
    pub document_type: String,
    pub categories: Vec<String>,
    pub source: SourceRecord,
    pub retrieved_date: String,
    pub additional_info: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub provider: String,
    pub repository: String,
}

/// Per-item facts a fetcher collects for the sidecar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Provenance {
    pub title: String,
    pub url: String,
    pub categories: Vec<String>,
    /// Pixel dimensions as `(width, height)`.
    pub resolution: Option<(u32, u32)>,
    pub format: Option<String>,
    /// Source-specific keys appended after `resolution` and `format`.
    pub additional_info: Map<String, Value>,
}

impl Provenance {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_info(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.additional_info.insert(key.to_string(), value.into());
        self
    }
}

/// Assemble the sidecar for one asset. Pure: the caller supplies the date.
pub fn build_metadata(
    descriptor: &SourceDescriptor,
    provenance: &Provenance,
    retrieved: NaiveDate,
) -> MetadataRecord {
    let mut additional_info = Map::new();
    if let Some((width, height)) = provenance.resolution {
        additional_info.insert(
            "resolution".to_string(),
            Value::String(format!("{width}x{height}")),
        );
    }
    if let Some(format) = &provenance.format {
        additional_info.insert("format".to_string(), Value::String(format.clone()));
    }
    for (key, value) in &provenance.additional_info {
        additional_info.insert(key.clone(), value.clone());
    }

    MetadataRecord {
        title: provenance.title.clone(),
        url: provenance.url.clone(),
        document_type: descriptor.document_type.clone(),
        categories: provenance.categories.clone(),
        source: SourceRecord {
            provider: descriptor.provider.clone(),
            repository: descriptor.repository.clone(),
        },
        retrieved_date: retrieved.format(RETRIEVED_DATE_FORMAT).to_string(),
        additional_info,
    }
}

impl MetadataRecord {
    /// Pretty JSON with four-space indentation.
    pub fn to_sidecar_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        out.push(b'\n');
        Ok(out)
    }
}
