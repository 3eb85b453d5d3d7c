//! Upload pre-checks run before any parsing.

use bizbook_core::constants::{CONTACT_NAME_HINT, VCF_EXTENSION};
use bizbook_vcf::vcf::validate_content;
use thiserror::Error;

/// Why an uploaded file was refused before parsing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Invalid file type. Please upload a .vcf file")]
    InvalidFileType,

    #[error("File is empty")]
    EmptyFile,

    #[error("Invalid VCF file format")]
    InvalidFormat,
}

/// Accepts names ending in `.vcf` or containing `contact`, ignoring case.
///
/// ## Errors
/// Returns `UploadRejection::InvalidFileType` for any other name.
pub fn check_file_name(file_name: &str) -> Result<(), UploadRejection> {
    let lowered = file_name.to_lowercase();
    if lowered.ends_with(VCF_EXTENSION) || lowered.contains(CONTACT_NAME_HINT) {
        Ok(())
    } else {
        Err(UploadRejection::InvalidFileType)
    }
}

/// ## Summary
/// Runs every pre-check in order: file name (when `require_vcf_extension`),
/// non-empty content, then the vCard marker check.
///
/// ## Errors
/// Returns the first [`UploadRejection`] that applies.
pub fn check_upload(
    file_name: &str,
    content: &str,
    require_vcf_extension: bool,
) -> Result<(), UploadRejection> {
    if require_vcf_extension {
        check_file_name(file_name)?;
    }

    if content.trim().is_empty() {
        return Err(UploadRejection::EmptyFile);
    }

    if !validate_content(content) {
        return Err(UploadRejection::InvalidFormat);
    }

    Ok(())
}
