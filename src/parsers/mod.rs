//! Content classification and structural extraction
//!
//! Each structured [`ContentKind`] has exactly one extractor. Plain text has
//! none; adding a language means adding a kind and an arm in [`extract`].

pub mod classifier;
pub mod javascript;
pub mod python;

pub use classifier::classify;

use crate::error::Result;
use crate::models::summary::{ContentKind, StructuralSummary};
use std::path::Path;

/// Run the extractor registered for `kind`
///
/// Returns `Ok(None)` for plain text. `path` is only used for error context.
pub fn extract(kind: ContentKind, path: &Path, content: &str) -> Result<Option<StructuralSummary>> {
    match kind {
        ContentKind::Python => python::extract(path, content).map(|s| Some(StructuralSummary::Python(s))),
        ContentKind::JavaScript => Ok(Some(StructuralSummary::JavaScript(javascript::extract(content)))),
        ContentKind::Text => Ok(None),
    }
}
