//! Per-file import results.

use std::path::Path;

use bizbook_core::config::ImportConfig;
use bizbook_vcf::vcf::{ParseReport, ParsedContact, parse_report};
use serde::Serialize;

use super::upload::check_upload;
use crate::error::{AppError, AppResult};

/// What one file produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub file: String,
    pub parsed: usize,
    pub skipped: usize,
    pub contacts: Vec<ParsedContact>,
    pub message: String,
}

impl ImportSummary {
    #[must_use]
    pub fn new(file: impl Into<String>, report: ParseReport) -> Self {
        let parsed = report.contacts.len();
        let skipped = report.skipped.len();

        Self {
            file: file.into(),
            parsed,
            skipped,
            contacts: report.contacts,
            message: format!("Parsed {parsed} contacts. {skipped} cards were skipped."),
        }
    }
}

/// ## Summary
/// Checks and parses the text of one uploaded file.
///
/// ## Errors
/// Returns `AppError::UploadRejected` if a pre-check fails and
/// `AppError::VcfError` if the parser rejects the file.
#[tracing::instrument(skip(content, options), fields(content_len = content.len()))]
pub fn import_text(
    file_name: &str,
    content: &str,
    options: &ImportConfig,
) -> AppResult<ImportSummary> {
    check_upload(file_name, content, options.require_vcf_extension)?;

    let report = parse_report(content)?;
    for skipped in &report.skipped {
        tracing::info!(file = file_name, %skipped, "Card skipped");
    }

    let summary = ImportSummary::new(file_name, report);
    tracing::info!(
        parsed = summary.parsed,
        skipped = summary.skipped,
        "Import finished"
    );

    Ok(summary)
}

/// ## Summary
/// Reads a file as UTF-8 and imports it. The file name (not the full path)
/// is used for the file-type check and in the summary.
///
/// ## Errors
/// Returns `AppError::ReadError` if the file cannot be read, otherwise the
/// errors of [`import_text`].
pub fn import_file(path: &Path, options: &ImportConfig) -> AppResult<ImportSummary> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );

    import_text(&file_name, &content, options)
}
