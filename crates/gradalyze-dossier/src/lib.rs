//! # gradalyze-dossier
//!
//! Printable dossier export: renders the analysis results view into a
//! print-themed bitmap, fits it inside A4 margins (width-fill preferred,
//! never cropping, never overflowing height), and composes a single-page
//! PDF with the image centered between the margins.

pub mod fit;
pub mod pdf;
pub mod render;
pub mod theme;

use std::path::Path;

use gradalyze_core::{AnalysisResults, Error, Result};

pub use fit::{fit_to_page, FittedRect};
pub use render::render_results;

/// Export a single-page PDF dossier of the given results to `path`.
///
/// Any failure along the way surfaces as a generic "export failed" error
/// (the cause is logged), and no partial output file is left behind.
pub fn export_dossier(results: &AnalysisResults, path: &Path) -> Result<()> {
    let outcome = render_results(results)
        .and_then(|image| {
            let fit = fit_to_page(image.width(), image.height());
            pdf::compose_pdf(&image, &fit, path)
        });

    match outcome {
        Ok(()) => {
            tracing::info!(path = %path.display(), "dossier exported");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "dossier export failed");
            // A failed save can leave a partial file; tear it down.
            let _ = std::fs::remove_file(path);
            Err(Error::Dossier("export failed".to_string()))
        }
    }
}
