use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the export pipeline.
///
/// A word-limit violation is NOT an error — it is reported as data in a
/// [`crate::validation::ValidationReport`] so the form UI can warn the user
/// and withhold the download. Everything here is fatal to the render attempt
/// that raised it; re-invocation with the same inputs is safe.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The configured font strategy needs a font asset that could not be found.
    #[error("font asset missing: searched {searched}")]
    FontAssetMissing { searched: String },

    /// A font asset was found but could not be loaded or parsed.
    #[error("font asset unusable at {}: {source}", path.display())]
    FontAssetInvalid {
        path: PathBuf,
        #[source]
        source: genpdf::error::Error,
    },

    /// The layout engine failed while producing the document.
    /// No partial output exists when this is returned.
    #[error("PDF layout error: {0}")]
    Pdf(#[from] genpdf::error::Error),

    /// Invalid configuration (unknown strategy name, unparsable threshold).
    #[error("configuration error: {0}")]
    Config(#[from] anyhow::Error),
}
