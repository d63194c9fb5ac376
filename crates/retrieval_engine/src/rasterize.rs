use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use pdfium_render::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("pdfium library unavailable: {0}")]
    Library(String),
    #[error("document could not be rendered: {0}")]
    Render(String),
    #[error("document has no pages")]
    Empty,
}

/// Document-to-image boundary.
pub trait Rasterizer: Send + Sync {
    /// One image per page, in page order.
    fn rasterize(&self, path: &Path) -> Result<Vec<DynamicImage>, ConvertError>;
}

/// Renders PDFs with pdfium, bound freshly for every document.
#[derive(Debug, Clone)]
pub struct PdfiumRasterizer {
    library_dir: Option<PathBuf>,
    dpi: u16,
}

impl PdfiumRasterizer {
    /// `library_dir` holds the pdfium shared library; `None` uses the system search path.
    pub fn new(library_dir: Option<PathBuf>, dpi: u16) -> Self {
        Self { library_dir, dpi }
    }

    fn bind(&self) -> Result<Pdfium, ConvertError> {
        let bindings = match &self.library_dir {
            Some(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            }
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|err| ConvertError::Library(err.to_string()))?;
        Ok(Pdfium::new(bindings))
    }
}

impl Rasterizer for PdfiumRasterizer {
    fn rasterize(&self, path: &Path) -> Result<Vec<DynamicImage>, ConvertError> {
        let pdfium = self.bind()?;
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|err| ConvertError::Render(err.to_string()))?;

        let config = PdfRenderConfig::new().scale_page_by_factor(f32::from(self.dpi) / 72.0);
        let mut pages = Vec::new();
        for page in document.pages().iter() {
            let bitmap = page
                .render_with_config(&config)
                .map_err(|err| ConvertError::Render(err.to_string()))?;
            let (width, height) = (bitmap.width() as u32, bitmap.height() as u32);
            let rgba = RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes()).ok_or_else(|| {
                ConvertError::Render(format!("bitmap buffer does not match {width}x{height}"))
            })?;
            pages.push(DynamicImage::ImageRgba8(rgba));
        }

        if pages.is_empty() {
            return Err(ConvertError::Empty);
        }
        Ok(pages)
    }
}
