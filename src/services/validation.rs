//! PDF type detection for dropped files.
//!
//! Two tiers: the MIME type reported by the platform is trusted first; the
//! file name suffix is the fallback, since browsers do not always populate the
//! type of a drag payload.

use crate::models::file::SelectedFile;

pub const PDF_MIME_TYPE: &str = "application/pdf";
const PDF_EXTENSION: &str = "pdf";

pub fn is_pdf_mime(mime_type: &str) -> bool {
    mime_type == PDF_MIME_TYPE
}

/// Whether the name ends with `.pdf`, ignoring case.
///
/// Same rule the upload endpoint applies to incoming names: there must be a
/// dot, and the text after the last one must lower-case to `pdf`.
pub fn has_pdf_extension(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase() == PDF_EXTENSION,
        None => false,
    }
}

/// Drop-path acceptance rule.
pub fn is_pdf_candidate(file: &SelectedFile) -> bool {
    is_pdf_mime(&file.mime_type) || has_pdf_extension(&file.file_name)
}
