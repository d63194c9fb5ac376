//! Run configuration with documented defaults.
//!
//! The engine never reads the process environment itself: the binary builds a
//! [`RunConfig`] once at start-up through [`RunConfig::from_lookup`] and tests
//! pass their own lookup closure.

use std::path::PathBuf;

use thiserror::Error;

use crate::SourceKind;

pub const DEFAULT_OUTPUT_ROOT: &str = "output/images";
pub const DEFAULT_WIKI_INPUT: &str = "output/wiki.jsonl";

pub const DEFAULT_INRIA_CAP: usize = 100;
pub const DEFAULT_IRF_CAP: usize = 100;
pub const DEFAULT_NASA_CAP: usize = 100;
pub const DEFAULT_WIKIMEDIA_PER_CATEGORY: usize = 50;

pub const COPERNICUS_EXPORT_URL: &str = "https://image.discomap.eea.europa.eu/arcgis/rest/services/GioLand/VHR_2021_LAEA/ImageServer/exportImage";
pub const EPREL_LABELS_URL: &str = "https://eprel.ec.europa.eu/labels";
/// Tried in order; `{category}` and `{id}` are substituted per product.
pub const EPREL_LABEL_TEMPLATES: [&str; 2] = [
    "{category}/Label_{id}.pdf",
    "{category}/Label_{id}_big_color.pdf",
];
pub const EPREL_RENDER_DPI: u16 = 200;

pub const KAGGLE_API_URL: &str = "https://www.kaggle.com/api/v1";
pub const INRIA_DATASET: &str = "sagar100rathod/inria-aerial-image-labeling-dataset";
pub const IRF_DATASET: &str = "liushuyuu/irregular-facades-irfs";

pub const INRIA_CITIES: [&str; 10] = [
    "Austin",
    "Chicago",
    "Kitsap",
    "Western Tyrol",
    "Vienna",
    "Bellingham",
    "Bloomington",
    "Innsbruck",
    "San Francisco",
    "Eastern Tyrol",
];

pub const NASA_FEEDS: [&str; 3] = [
    "https://earthobservatory.nasa.gov/feeds/image-of-the-day.rss",
    "https://earthobservatory.nasa.gov/feeds/natural-hazards.rss",
    "https://earthobservatory.nasa.gov/feeds/earth-observatory.rss",
];
pub const NASA_TOPICS: [&str; 3] = ["heat", "atmosphere", "land"];
pub const NASA_CUTOFF_YEARS: u32 = 10;

pub const WIKIMEDIA_API_URL: &str = "https://commons.wikimedia.org/w/api.php";
pub const WIKIMEDIA_CATEGORIES: [&str; 49] = [
    "Satellite pictures",
    "Construction",
    "Power plants",
    "Solar panels",
    "Wind turbines",
    "Smart meters",
    "Electric vehicles",
    "Energy storage",
    "Energy efficiency labels",
    "Renewable energy",
    "Energy transition",
    "Energy infrastructure",
    "Nuclear power plants",
    "Hydroelectric power plants",
    "Geothermal energy",
    "Biomass energy",
    "Coal-fired power plants",
    "Geothermal power plants",
    "Biofuels",
    "Power transmission lines",
    "Smart grids",
    "Substations",
    "Control rooms of transmission systems",
    "Energy monitoring systems",
    "Energy management systems",
    "Natural gas power plants",
    "Zero energy buildings",
    "Energy-efficient buildings",
    "Near-zero energy buildings",
    "Energy-efficient appliances",
    "Energy-efficient lighting",
    "Energy-efficient HVAC systems",
    "Energy-efficient windows",
    "smart home energy systems",
    "microgrids",
    "demand response systems",
    "virtual power plants",
    "carbon capture and storage",
    "fuel cells",
    "hydrogen energy systems",
    "green roofs",
    "solar thermal systems",
    "energy-efficient transportation",
    "energy-efficient industrial processes",
    "energy-efficient manufacturing",
    "district heating systems",
    "district cooling systems",
    "heat pumps",
    "photovoltaic systems",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a non-negative integer, got {value:?}")]
    InvalidNumber { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub output_root: PathBuf,
    pub kaggle_api: String,
    pub copernicus: CopernicusConfig,
    pub eprel: EprelConfig,
    pub inria: InriaConfig,
    pub irf: IrfConfig,
    pub nasa: NasaConfig,
    pub wikimedia: WikimediaConfig,
    pub wikipedia: WikipediaConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopernicusConfig {
    pub enabled: bool,
    pub max_items: Option<usize>,
    pub export_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EprelConfig {
    pub enabled: bool,
    pub max_items: Option<usize>,
    pub base_url: String,
    pub label_templates: Vec<String>,
    pub dpi: u16,
}

/// Where a Kaggle dataset archive lands and whether to refresh it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    /// `owner/slug` on the dataset host.
    pub dataset: String,
    pub download_dir: PathBuf,
    pub extract_dir: PathBuf,
    pub download: bool,
    pub extract: bool,
}

impl DatasetConfig {
    fn new(dataset: &str, download_dir: &str, extract_dir: &str) -> Self {
        Self {
            dataset: dataset.to_string(),
            download_dir: PathBuf::from(download_dir),
            extract_dir: PathBuf::from(extract_dir),
            download: true,
            extract: true,
        }
    }

    /// Archive file name the host writes: `<slug>.zip`.
    pub fn archive_path(&self) -> PathBuf {
        let slug = self.dataset.rsplit('/').next().unwrap_or(&self.dataset);
        self.download_dir.join(format!("{slug}.zip"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InriaConfig {
    pub enabled: bool,
    pub max_items: Option<usize>,
    pub dataset: DatasetConfig,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrfConfig {
    pub enabled: bool,
    pub max_items: Option<usize>,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NasaConfig {
    pub enabled: bool,
    pub max_items: Option<usize>,
    pub feeds: Vec<String>,
    pub topics: Vec<String>,
    pub cutoff_years: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikimediaConfig {
    pub enabled: bool,
    /// Applied per category as the search limit, not as a source-wide cap.
    pub per_category_limit: usize,
    pub api_url: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikipediaConfig {
    pub enabled: bool,
    pub max_items: Option<usize>,
    pub input: PathBuf,
}

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            kaggle_api: KAGGLE_API_URL.to_string(),
            copernicus: CopernicusConfig {
                enabled: true,
                max_items: None,
                export_url: COPERNICUS_EXPORT_URL.to_string(),
            },
            eprel: EprelConfig {
                enabled: true,
                max_items: None,
                base_url: EPREL_LABELS_URL.to_string(),
                label_templates: strings(EPREL_LABEL_TEMPLATES),
                dpi: EPREL_RENDER_DPI,
            },
            inria: InriaConfig {
                enabled: true,
                max_items: Some(DEFAULT_INRIA_CAP),
                dataset: DatasetConfig::new(
                    INRIA_DATASET,
                    "./inria_dataset",
                    "./inria_dataset_extracted",
                ),
                cities: strings(INRIA_CITIES),
            },
            irf: IrfConfig {
                enabled: true,
                max_items: Some(DEFAULT_IRF_CAP),
                dataset: DatasetConfig::new(IRF_DATASET, "./irfs_dataset", "./irfs_dataset_extracted"),
            },
            nasa: NasaConfig {
                enabled: true,
                max_items: Some(DEFAULT_NASA_CAP),
                feeds: strings(NASA_FEEDS),
                topics: strings(NASA_TOPICS),
                cutoff_years: NASA_CUTOFF_YEARS,
            },
            wikimedia: WikimediaConfig {
                enabled: true,
                per_category_limit: DEFAULT_WIKIMEDIA_PER_CATEGORY,
                api_url: WIKIMEDIA_API_URL.to_string(),
                categories: strings(WIKIMEDIA_CATEGORIES),
            },
            wikipedia: WikipediaConfig {
                enabled: true,
                max_items: None,
                input: PathBuf::from(DEFAULT_WIKI_INPUT),
            },
        }
    }
}

impl RunConfig {
    /// Defaults overlaid with whatever `lookup` returns for the known variables.
    ///
    /// A toggle is on only when its value is exactly `1`; an absent toggle keeps
    /// the default (on).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        for kind in SourceKind::RUN_ORDER {
            if let Some(value) = lookup(kind.toggle_var()) {
                *config.enabled_mut(kind) = flag(&value);
            }
            if let Some(cap) = number(&lookup, kind.cap_var())? {
                match kind {
                    SourceKind::Wikimedia => config.wikimedia.per_category_limit = cap,
                    other => {
                        if let Some(slot) = config.cap_mut(other) {
                            *slot = Some(cap);
                        }
                    }
                }
            }
        }

        let datasets = [
            ("DOWNLOAD_INRIA_DATA", "EXTRACT_INRIA_DATA", &mut config.inria.dataset),
            ("DOWNLOAD_IRF_DATA", "EXTRACT_IRF_DATA", &mut config.irf.dataset),
        ];
        for (download_var, extract_var, dataset) in datasets {
            if let Some(value) = lookup(download_var) {
                dataset.download = flag(&value);
            }
            if let Some(value) = lookup(extract_var) {
                dataset.extract = flag(&value);
            }
        }

        Ok(config)
    }

    pub fn enabled(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Copernicus => self.copernicus.enabled,
            SourceKind::Eprel => self.eprel.enabled,
            SourceKind::Inria => self.inria.enabled,
            SourceKind::Irf => self.irf.enabled,
            SourceKind::Nasa => self.nasa.enabled,
            SourceKind::Wikimedia => self.wikimedia.enabled,
            SourceKind::Wikipedia => self.wikipedia.enabled,
        }
    }

    /// Source-wide cap on persisted assets; `None` is unbounded.
    pub fn cap(&self, kind: SourceKind) -> Option<usize> {
        match kind {
            SourceKind::Copernicus => self.copernicus.max_items,
            SourceKind::Eprel => self.eprel.max_items,
            SourceKind::Inria => self.inria.max_items,
            SourceKind::Irf => self.irf.max_items,
            SourceKind::Nasa => self.nasa.max_items,
            SourceKind::Wikimedia => None,
            SourceKind::Wikipedia => self.wikipedia.max_items,
        }
    }

    /// Enable exactly one source, disabling the rest.
    pub fn only(mut self, kind: SourceKind) -> Self {
        for other in SourceKind::RUN_ORDER {
            *self.enabled_mut(other) = other == kind;
        }
        self
    }

    fn enabled_mut(&mut self, kind: SourceKind) -> &mut bool {
        match kind {
            SourceKind::Copernicus => &mut self.copernicus.enabled,
            SourceKind::Eprel => &mut self.eprel.enabled,
            SourceKind::Inria => &mut self.inria.enabled,
            SourceKind::Irf => &mut self.irf.enabled,
            SourceKind::Nasa => &mut self.nasa.enabled,
            SourceKind::Wikimedia => &mut self.wikimedia.enabled,
            SourceKind::Wikipedia => &mut self.wikipedia.enabled,
        }
    }

    fn cap_mut(&mut self, kind: SourceKind) -> Option<&mut Option<usize>> {
        match kind {
            SourceKind::Copernicus => Some(&mut self.copernicus.max_items),
            SourceKind::Eprel => Some(&mut self.eprel.max_items),
            SourceKind::Inria => Some(&mut self.inria.max_items),
            SourceKind::Irf => Some(&mut self.irf.max_items),
            SourceKind::Nasa => Some(&mut self.nasa.max_items),
            SourceKind::Wikimedia => None,
            SourceKind::Wikipedia => Some(&mut self.wikipedia.max_items),
        }
    }
}

fn flag(value: &str) -> bool {
    value == "1"
}

fn number<F>(lookup: &F, var: &str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber {
                var: var.to_string(),
                value,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_path_uses_dataset_slug() {
        let dataset = DatasetConfig::new("owner/some-set", "./dl", "./out");
        assert_eq!(dataset.archive_path(), PathBuf::from("./dl/some-set.zip"));
    }

    #[test]
    fn only_leaves_a_single_source_enabled() {
        let config = RunConfig::default().only(SourceKind::Irf);
        let enabled: Vec<_> = SourceKind::RUN_ORDER
            .into_iter()
            .filter(|kind| config.enabled(*kind))
            .collect();
        assert_eq!(enabled, vec![SourceKind::Irf]);
    }
}
