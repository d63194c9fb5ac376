use std::fmt;
use std::future::Future;

use futures_util::stream::{self, BoxStream, StreamExt};
use retrieval_core::{PipelineResult, SourceDescriptor};

use crate::driver::{PipelineDriver, PipelineError};
use crate::{FetchOutcome, SourceError};

pub type ItemStream<'a, T> = BoxStream<'a, Result<T, SourceError>>;

/// One retrieval source: a lazy enumerator plus a per-item fetcher.
///
/// `enumerate` must be restartable: every call begins from the first item.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Candidate item; its `Display` form is the label used in log lines.
    type Item: fmt::Display + Send + Sync;

    fn descriptor(&self) -> &SourceDescriptor;

    fn enumerate(&self) -> ItemStream<'_, Self::Item>;

    async fn fetch(&self, item: &Self::Item) -> FetchOutcome;
}

/// Object-safe view of a [`Source`] with its item type erased.
#[async_trait::async_trait]
pub trait RunnableSource: Send + Sync {
    fn descriptor(&self) -> &SourceDescriptor;

    async fn run(&self, driver: &PipelineDriver) -> Result<PipelineResult, PipelineError>;
}

#[async_trait::async_trait]
impl<S: Source> RunnableSource for S {
    fn descriptor(&self) -> &SourceDescriptor {
        Source::descriptor(self)
    }

    async fn run(&self, driver: &PipelineDriver) -> Result<PipelineResult, PipelineError> {
        driver.drive(self).await
    }
}

/// A stream that awaits one listing future on first poll, then yields its items.
/// A listing error becomes a single `Err` item.
pub(crate) fn deferred<'a, T, F>(listing: F) -> ItemStream<'a, T>
where
    T: Send + 'a,
    F: Future<Output = Result<Vec<T>, SourceError>> + Send + 'a,
{
    stream::once(listing)
        .flat_map(|listed| {
            let items: Vec<Result<T, SourceError>> = match listed {
                Ok(items) => items.into_iter().map(Ok).collect(),
                Err(err) => vec![Err(err)],
            };
            stream::iter(items)
        })
        .boxed()
}
