//! Boring static-asset filter.
//!
//! Advisory: the pipeline consults it only when `exclude_static` is on and
//! `include_scripts` is off, so script inclusion bypasses static filtering
//! entirely rather than just unboring the script extensions.

use crate::url_model::ParsedUrl;

/// Non-executable static content: markup, styles, images, fonts, media,
/// office documents, archives.
const BORING_EXTENSIONS: &[&str] = &[
    ".html", ".htm", ".css", ".scss", ".sass", ".less", ".png", ".jpg", ".jpeg", ".gif", ".ico",
    ".svg", ".webp", ".eot", ".ttf", ".woff", ".woff2", ".otf", ".mp3", ".mp4", ".avi", ".mov",
    ".wmv", ".flv", ".webm", ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".zip",
    ".rar", ".tar", ".gz", ".7z",
];

/// Script endings, boring only while scripts are excluded.
const SCRIPT_EXTENSIONS: &[&str] = &[".js", ".map", ".min.js"];

/// True when the decoded lowercase path ends with a boring extension.
/// Script endings count as boring only when `include_scripts` is false.
pub fn is_boring(url: &ParsedUrl, include_scripts: bool) -> bool {
    let path = url.path_decoded_lower();
    if BORING_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return true;
    }
    !include_scripts && SCRIPT_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
