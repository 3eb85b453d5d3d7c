//! Contact import pipeline.
//!
//! Runs the upload pre-checks, then hands the text to the VCF parser and
//! turns its report into an [`ImportSummary`].

mod summary;
mod upload;

pub use summary::{ImportSummary, import_file, import_text};
pub use upload::{UploadRejection, check_file_name, check_upload};
