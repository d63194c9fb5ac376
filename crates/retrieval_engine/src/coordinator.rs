use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use retrieval_core::{PipelineResult, RunConfig, SourceKind};
use retrieval_logging::{retrieval_error, retrieval_info};

use crate::driver::{Clock, LogSink, PipelineDriver, ProgressSink};
use crate::sources::{
    CopernicusSource, EprelSource, InriaSource, IrfSource, NasaSource, WikimediaSource,
    WikipediaSource,
};
use crate::{AssetWriter, DatasetHost, HttpClient, LanguageDetector, Rasterizer, RunnableSource};

/// External boundaries the sources are built on.
pub struct Services {
    pub http: Arc<dyn HttpClient>,
    pub language: Arc<dyn LanguageDetector>,
    pub rasterizer: Arc<dyn Rasterizer>,
    pub datasets: Arc<dyn DatasetHost>,
    pub today: Clock,
}

pub struct SourceSlot {
    pub kind: SourceKind,
    pub enabled: bool,
    pub cap: Option<usize>,
    pub source: Box<dyn RunnableSource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Disabled,
    Completed,
    Failed(String),
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceStatus::Disabled => write!(f, "disabled"),
            SourceStatus::Completed => write!(f, "completed"),
            SourceStatus::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub kind: SourceKind,
    pub status: SourceStatus,
    pub result: PipelineResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunReport {
    pub sources: Vec<SourceReport>,
}

impl RunReport {
    pub fn get(&self, kind: SourceKind) -> Option<&SourceReport> {
        self.sources.iter().find(|report| report.kind == kind)
    }

    pub fn total_succeeded(&self) -> usize {
        self.sources.iter().map(|report| report.result.succeeded).sum()
    }
}

/// Runs the enabled sources one after another in fixed order.
pub struct RunCoordinator {
    output_root: PathBuf,
    slots: Vec<SourceSlot>,
    today: Clock,
    sink: Arc<dyn ProgressSink>,
}

impl RunCoordinator {
    pub fn new(config: &RunConfig, services: Services) -> Self {
        let Services {
            http,
            language,
            rasterizer,
            datasets,
            today,
        } = services;

        let sources: Vec<(SourceKind, Box<dyn RunnableSource>)> = vec![
            (
                SourceKind::Copernicus,
                Box::new(CopernicusSource::new(http.clone(), &config.copernicus)),
            ),
            (
                SourceKind::Eprel,
                Box::new(EprelSource::new(http.clone(), rasterizer, &config.eprel)),
            ),
            (
                SourceKind::Inria,
                Box::new(InriaSource::new(datasets.clone(), &config.inria)),
            ),
            (
                SourceKind::Irf,
                Box::new(IrfSource::new(datasets, &config.irf)),
            ),
            (
                SourceKind::Nasa,
                Box::new(NasaSource::new(http.clone(), today.clone(), &config.nasa)),
            ),
            (
                SourceKind::Wikimedia,
                Box::new(WikimediaSource::new(http.clone(), language, &config.wikimedia)),
            ),
            (
                SourceKind::Wikipedia,
                Box::new(WikipediaSource::new(http, &config.wikipedia)),
            ),
        ];

        let slots = sources
            .into_iter()
            .map(|(kind, source)| SourceSlot {
                kind,
                enabled: config.enabled(kind),
                cap: config.cap(kind),
                source,
            })
            .collect();
        Self::from_slots(config.output_root.clone(), slots, today)
    }

    /// Slots are reordered into run order whatever order they are given in.
    pub fn from_slots(output_root: PathBuf, mut slots: Vec<SourceSlot>, today: Clock) -> Self {
        slots.sort_by_key(|slot| slot.kind);
        Self {
            output_root,
            slots,
            today,
            sink: Arc::new(LogSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    pub async fn run(&self) -> RunReport {
        retrieval_info!("=== Starting Image Retrieval ===");
        for slot in &self.slots {
            retrieval_info!("{}: {}", slot.kind.toggle_var(), slot.enabled);
        }

        let mut report = RunReport::default();
        for slot in &self.slots {
            report.sources.push(self.run_slot(slot).await);
        }

        retrieval_info!("=== Image Retrieval Completed ===");
        report
    }

    async fn run_slot(&self, slot: &SourceSlot) -> SourceReport {
        if !slot.enabled {
            return SourceReport {
                kind: slot.kind,
                status: SourceStatus::Disabled,
                result: PipelineResult::default(),
            };
        }

        let writer = AssetWriter::new(self.output_root.join(slot.kind.slug()));
        let driver = PipelineDriver::new(writer, slot.cap, self.today.clone(), self.sink.clone());
        match slot.source.run(&driver).await {
            Ok(result) => {
                retrieval_info!("{} retrieval completed: {result}", slot.kind);
                SourceReport {
                    kind: slot.kind,
                    status: SourceStatus::Completed,
                    result,
                }
            }
            Err(err) => {
                retrieval_error!("{} retrieval failed", slot.kind);
                SourceReport {
                    kind: slot.kind,
                    status: SourceStatus::Failed(err.to_string()),
                    result: err.partial(),
                }
            }
        }
    }
}
