//! `retrieve-images`: runs every enabled image source once and exits.

mod logging;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use retrieval_core::{RunConfig, DEFAULT_OUTPUT_ROOT, DEFAULT_WIKI_INPUT};
use retrieval_engine::{
    system_clock, FetchSettings, KaggleCredentials, KaggleHost, PdfiumRasterizer, ReqwestClient,
    RunCoordinator, RunReport, Services, WhatlangDetector,
};
use retrieval_logging::retrieval_warn;

#[derive(Parser, Debug)]
#[command(
    name = "retrieve-images",
    about = "Collect energy-related images and their metadata from public sources"
)]
struct Cli {
    /// Root directory; each source writes below `<root>/<source>/`
    #[arg(long, default_value = DEFAULT_OUTPUT_ROOT)]
    output_root: PathBuf,

    /// JSONL file of scraped Wikipedia articles
    #[arg(long, default_value = DEFAULT_WIKI_INPUT)]
    wiki_input: PathBuf,

    #[arg(long, default_value = logging::DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Per-request timeout; no timeout when omitted
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Directory holding the pdfium shared library (system search path otherwise)
    #[arg(long)]
    pdfium_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(&cli.log_file, cli.debug)?;

    let mut config = RunConfig::from_lookup(|name| std::env::var(name).ok())
        .context("invalid environment configuration")?;
    config.output_root = cli.output_root.clone();
    config.wikipedia.input = cli.wiki_input.clone();

    let services = build_services(&cli, &config)?;
    let report = RunCoordinator::new(&config, services).run().await;
    print_report(&report);
    Ok(())
}

fn build_services(cli: &Cli, config: &RunConfig) -> anyhow::Result<Services> {
    let settings = FetchSettings {
        request_timeout: cli.timeout_secs.map(Duration::from_secs),
        ..FetchSettings::default()
    };
    let http = Arc::new(ReqwestClient::new(settings).context("cannot build HTTP client")?);

    let credentials = KaggleCredentials::resolve(
        |name| std::env::var(name).ok(),
        KaggleCredentials::default_config_file().as_deref(),
    );
    if let Err(err) = &credentials {
        retrieval_warn!("{err}; dataset downloads will fail");
    }
    let datasets = Arc::new(KaggleHost::new(
        http.clone(),
        config.kaggle_api.clone(),
        credentials,
    ));

    Ok(Services {
        http,
        language: Arc::new(WhatlangDetector),
        rasterizer: Arc::new(PdfiumRasterizer::new(cli.pdfium_dir.clone(), config.eprel.dpi)),
        datasets,
        today: system_clock(),
    })
}

fn print_report(report: &RunReport) {
    for source in &report.sources {
        let status = source.status.to_string();
        println!("{:<12} {status:<10} {}", source.kind.slug(), source.result);
    }
    println!("total assets written: {}", report.total_succeeded());
}
