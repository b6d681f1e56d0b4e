//! Extension-based content classification

use crate::models::summary::ContentKind;
use std::path::Path;

/// Extensions handled by the Python extractor
pub const PYTHON_EXTENSIONS: [&str; 1] = ["py"];

/// Extensions handled by the JavaScript pattern extractor
pub const SCRIPT_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Map a file path to its content kind, ignoring extension case
pub fn classify(path: &Path) -> ContentKind {
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return ContentKind::Text,
    };

    if PYTHON_EXTENSIONS.contains(&ext.as_str()) {
        ContentKind::Python
    } else if SCRIPT_EXTENSIONS.contains(&ext.as_str()) {
        ContentKind::JavaScript
    } else {
        ContentKind::Text
    }
}
