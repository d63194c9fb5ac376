//! The seven retrieval sources.

pub mod copernicus;
pub mod eprel;
pub mod inria;
pub mod irf;
pub mod nasa;
pub mod wikimedia;
pub mod wikipedia;

pub use copernicus::{CopernicusSource, RegionItem};
pub use eprel::{EprelSource, ProductItem};
pub use inria::{InriaSource, TileItem};
pub use irf::{FacadeItem, IrfSource};
pub use nasa::{ArticleLink, NasaSource};
pub use wikimedia::{CommonsFile, WikimediaSource};
pub use wikipedia::{FigureImage, WikipediaSource};
