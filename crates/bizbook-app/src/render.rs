//! Import result rendering.
//!
//! Pretty output is one line per file and per contact; JSON output is a
//! single object so it can be piped into other tools.

use std::io::Write;

use anyhow::Result;
use bizbook_core::config::OutputFormat;
use bizbook_vcf::vcf::ParsedContact;
use serde::Serialize;

use crate::import::ImportSummary;

/// A file that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportFailure {
    pub file: String,
    pub error: String,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    imports: &'a [ImportSummary],
    failures: &'a [ImportFailure],
}

/// ## Summary
/// Writes all summaries and failures in the requested format.
///
/// ## Errors
/// Returns an error if writing to `out` or JSON serialization fails.
pub fn render(
    summaries: &[ImportSummary],
    failures: &[ImportFailure],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(
                &mut *out,
                &JsonOutput {
                    imports: summaries,
                    failures,
                },
            )?;
            writeln!(out)?;
        }
        OutputFormat::Pretty => {
            for summary in summaries {
                writeln!(out, "{}: {}", summary.file, summary.message)?;
                for contact in &summary.contacts {
                    writeln!(out, "  - {}", contact_line(contact))?;
                }
            }
            for failure in failures {
                writeln!(out, "{}: import failed: {}", failure.file, failure.error)?;
            }
        }
    }

    Ok(())
}

fn contact_line(contact: &ParsedContact) -> String {
    let mut line = contact.name.clone();
    for value in [&contact.phone, &contact.email, &contact.address]
        .into_iter()
        .flatten()
    {
        line.push_str(" | ");
        line.push_str(value);
    }
    line
}
