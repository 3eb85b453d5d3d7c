//! vCard (VCF) contact import.
//!
//! This module turns the text of an address-book export into flat contact
//! records. It is a lenient importer, not a full RFC 6350 implementation:
//! each card is reduced to one name, phone, email, address and note.
//!
//! ## Usage
//!
//! ```rust
//! use bizbook_vcf::vcf::{parse_vcf, validate_content};
//!
//! let input = "\
//! BEGIN:VCARD\n\
//! VERSION:3.0\n\
//! FN:Jane Doe\n\
//! TEL;TYPE=CELL:+1-555-0100\n\
//! EMAIL:jane@example.com\n\
//! END:VCARD\n";
//!
//! assert!(validate_content(input));
//!
//! let contacts = parse_vcf(input).unwrap();
//! assert_eq!(contacts[0].name, "Jane Doe");
//! assert_eq!(contacts[0].phone.as_deref(), Some("+1-555-0100"));
//! ```
//!
//! ## Failure model
//!
//! File-level problems are returned as [`VcfError`](crate::error::VcfError).
//! A card that cannot be read is skipped and reported through
//! [`ParseReport::skipped`]; it never aborts the rest of the file.
//!
//! ## Submodules
//!
//! - [`core`](self::core) - Output record and field table
//! - [`parse`] - Splitting, decoding, field policies and orchestration

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use self::core::{FieldKind, ParsedContact};
pub use parse::{
    CardSkip, ParseReport, SkippedCard, UNKNOWN_CONTACT, decode_value, parse_card, parse_report,
    parse_vcf, resolve_name, split_cards, validate_content,
};
