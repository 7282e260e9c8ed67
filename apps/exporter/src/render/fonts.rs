//! Font strategy resolution for the renderer.
//!
//! Two strategies, picked once via configuration:
//!
//! - **Embedded** (preferred): embed a full-Unicode TTF family so diacritics
//!   and non-Latin scripts in student answers render correctly.
//! - **Core** (degraded fallback): use the PDF built-in Helvetica, which only
//!   covers a single-byte encoding; characters outside Latin-1 are replaced
//!   with a visible `?` instead of failing the render.
//!
//! genpdf needs a metrics TTF even for the built-in font, so both strategies
//! require a font asset on disk. Fonts are registered per document, never
//! globally, so duplicate registration cannot occur; only a missing or
//! unusable asset is an error.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::bail;
use genpdf::fonts::{Builtin, FontData, FontFamily};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::errors::ExportError;

/// Which encoding strategy the renderer uses for body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStrategy {
    /// Embed a full-Unicode TTF family.
    Embedded,
    /// Built-in Helvetica; non-Latin-1 characters are replaced with `?`.
    Core,
}

impl FromStr for FontStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "embedded" => Ok(FontStrategy::Embedded),
            "core" => Ok(FontStrategy::Core),
            other => bail!("unknown font strategy '{other}'"),
        }
    }
}

/// Directories probed when no `FONT_DIR` is configured.
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/System/Library/Fonts/Supplemental",
    "/Library/Fonts",
];

/// Family file stems probed when no `FONT_NAME` is configured. genpdf expects
/// `{name}-Regular.ttf` / `-Bold` / `-Italic` / `-BoldItalic` in the directory.
const DEFAULT_FAMILY_NAMES: &[&str] = &["LiberationSans", "DejaVuSans", "Arial"];

/// Resolves and loads the font family for the configured strategy.
///
/// With an explicit `font_dir` + `font_name` the asset must load or the
/// render fails; otherwise the standard directories are probed and the first
/// loadable family wins. Nothing found is fatal — the strategy is never
/// silently downgraded.
pub fn load_font_family(config: &Config) -> Result<FontFamily<FontData>, ExportError> {
    let builtin = match config.strategy {
        FontStrategy::Embedded => None,
        FontStrategy::Core => Some(Builtin::Helvetica),
    };

    if let (Some(dir), Some(name)) = (&config.font_dir, &config.font_name) {
        let regular = dir.join(format!("{name}-Regular.ttf"));
        if !regular.exists() {
            return Err(ExportError::FontAssetMissing {
                searched: regular.display().to_string(),
            });
        }
        return genpdf::fonts::from_files(dir, name, builtin).map_err(|source| {
            ExportError::FontAssetInvalid {
                path: regular,
                source,
            }
        });
    }

    let dirs: Vec<PathBuf> = match &config.font_dir {
        Some(dir) => vec![dir.clone()],
        None => SYSTEM_FONT_DIRS.iter().map(PathBuf::from).collect(),
    };
    let names: Vec<&str> = match &config.font_name {
        Some(name) => vec![name.as_str()],
        None => DEFAULT_FAMILY_NAMES.to_vec(),
    };

    for dir in &dirs {
        if !dir.exists() {
            continue;
        }
        for name in &names {
            match genpdf::fonts::from_files(dir, name, builtin) {
                Ok(family) => {
                    debug!(dir = %dir.display(), name = %name, strategy = ?config.strategy, "loaded font family");
                    return Ok(family);
                }
                Err(err) => {
                    debug!(dir = %dir.display(), name = %name, %err, "font candidate not loadable");
                }
            }
        }
    }

    Err(ExportError::FontAssetMissing {
        searched: format!(
            "{} for families {}",
            dirs.iter()
                .map(|d| d.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            names.join(", ")
        ),
    })
}

/// Replaces every character outside Latin-1 with a visible `?`.
///
/// Returns the sanitized text and the number of replacements, so the caller
/// can log that the core-font strategy degraded the content.
pub fn sanitize_latin1(text: &str) -> (String, usize) {
    let mut replaced = 0;
    let sanitized = text
        .chars()
        .map(|c| {
            if (c as u32) <= 0xFF {
                c
            } else {
                replaced += 1;
                '?'
            }
        })
        .collect();
    (sanitized, replaced)
}
