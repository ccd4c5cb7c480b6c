use anyhow::{Context, Result};
use image::RgbImage;
use pdfium_render::prelude::*;
use std::path::Path;

/// Handle to the pdfium library, used only for rasterization.
pub struct Renderer {
    pdfium: Pdfium,
}

impl Renderer {
    /// Bind to a pdfium library next to the executable, falling back to the
    /// system library.
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .context(
                "Failed to load the pdfium library; install it or place it next to the executable",
            )?;
        Ok(Renderer {
            pdfium: Pdfium::new(bindings),
        })
    }

    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<RenderedPdf<'_>> {
        let path = path.as_ref();
        let doc = self
            .pdfium
            .load_pdf_from_file(path, None)
            .with_context(|| format!("Failed to open PDF for rendering: {}", path.display()))?;
        Ok(RenderedPdf {
            doc,
            config: PdfRenderConfig::new().scale_page_by_factor(1.0),
        })
    }
}

/// A document opened for page rasterization.
pub struct RenderedPdf<'a> {
    doc: PdfDocument<'a>,
    config: PdfRenderConfig,
}

impl RenderedPdf<'_> {
    pub fn page_count(&self) -> u32 {
        self.doc.pages().len() as u32
    }

    /// Rasterize the page at a 0-based index into an RGB grid.
    pub fn rasterize(&self, index: u32) -> Result<RgbImage> {
        let page = self
            .doc
            .pages()
            .get(index as u16)
            .with_context(|| format!("Failed to load page {} for rendering", index))?;
        let bitmap = page
            .render_with_config(&self.config)
            .with_context(|| format!("Failed to render page {}", index))?;

        let image = bitmap.as_image().into_rgb8();
        log::debug!("rasterized page {} at {}x{}", index, image.width(), image.height());
        Ok(image)
    }
}
