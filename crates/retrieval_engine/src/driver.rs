use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use futures_util::StreamExt;
use retrieval_core::{build_metadata, PipelineResult, SourceKind};
use retrieval_logging::{retrieval_error, retrieval_info, retrieval_warn};
use thiserror::Error;

use crate::{AssetWriter, FetchOutcome, FilterReason, Source, SourceError};

/// Supplies the run date for sidecars and date filters.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(|| chrono::Local::now().date_naive())
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source aborted after {partial}: {error}")]
    Source {
        partial: PipelineResult,
        error: SourceError,
    },
}

impl PipelineError {
    pub fn partial(&self) -> PipelineResult {
        match self {
            PipelineError::Source { partial, .. } => *partial,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Succeeded(PathBuf),
    Filtered(FilterReason),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    Started {
        kind: SourceKind,
        cap: Option<usize>,
    },
    Item {
        label: String,
        outcome: ItemOutcome,
    },
    Finished {
        kind: SourceKind,
        result: PipelineResult,
    },
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

/// Writes every event to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn emit(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::Started { kind, cap } => match cap {
                Some(cap) => retrieval_info!("starting {kind} (cap {cap})"),
                None => retrieval_info!("starting {kind}"),
            },
            PipelineEvent::Item { label, outcome } => match outcome {
                ItemOutcome::Succeeded(path) => {
                    retrieval_info!("{label}: succeeded -> {}", path.display())
                }
                ItemOutcome::Filtered(reason) => retrieval_info!("{label}: filtered: {reason}"),
                ItemOutcome::Failed(error) => retrieval_warn!("{label}: failed: {error}"),
            },
            PipelineEvent::Finished { kind, result } => {
                retrieval_info!("finished {kind}: {result}")
            }
        }
    }
}

/// Runs one source end to end: pull, fetch, persist, count.
pub struct PipelineDriver {
    writer: AssetWriter,
    cap: Option<usize>,
    today: Clock,
    sink: Arc<dyn ProgressSink>,
}

impl PipelineDriver {
    pub fn new(
        writer: AssetWriter,
        cap: Option<usize>,
        today: Clock,
        sink: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            writer,
            cap,
            today,
            sink,
        }
    }

    pub async fn drive<S: Source>(&self, source: &S) -> Result<PipelineResult, PipelineError> {
        let kind = source.descriptor().kind;
        retrieval_logging::set_current_source(Some(kind.slug()));
        self.sink.emit(PipelineEvent::Started {
            kind,
            cap: self.cap,
        });

        let outcome = self.drive_items(source).await;

        let result = match &outcome {
            Ok(result) => *result,
            Err(err) => {
                retrieval_error!("{err}");
                err.partial()
            }
        };
        self.sink.emit(PipelineEvent::Finished { kind, result });
        retrieval_logging::set_current_source(None);
        outcome
    }

    async fn drive_items<S: Source>(&self, source: &S) -> Result<PipelineResult, PipelineError> {
        let descriptor = source.descriptor();
        let mut result = PipelineResult::default();
        let mut items = source.enumerate();

        loop {
            // Checked before every pull so no listing work happens past the cap.
            if result.cap_reached(self.cap) {
                break;
            }
            let item = match items.next().await {
                None => break,
                Some(Ok(item)) => item,
                Some(Err(error)) => {
                    return Err(PipelineError::Source {
                        partial: result,
                        error,
                    })
                }
            };

            result.attempted += 1;
            let label = item.to_string();
            let outcome = match source.fetch(&item).await {
                FetchOutcome::Filtered(reason) => {
                    result.skipped += 1;
                    ItemOutcome::Filtered(reason)
                }
                FetchOutcome::Failed(err) => {
                    result.failed += 1;
                    ItemOutcome::Failed(err.to_string())
                }
                FetchOutcome::Fetched(asset) => {
                    let record = build_metadata(descriptor, &asset.provenance, (self.today)());
                    match self.writer.write(&asset, &record) {
                        Ok(written) => {
                            result.succeeded += 1;
                            ItemOutcome::Succeeded(written.asset)
                        }
                        Err(err) => {
                            result.failed += 1;
                            ItemOutcome::Failed(err.to_string())
                        }
                    }
                }
            };
            self.sink.emit(PipelineEvent::Item { label, outcome });
        }

        Ok(result)
    }
}
