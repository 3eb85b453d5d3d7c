//! vCard import parsing.
//!
//! ## Pipeline
//!
//! 1. [`validate_content`] - cheap gate run by callers before parsing
//! 2. [`split_cards`] - cut the text into card bodies on `BEGIN:VCARD`/`END:VCARD`
//! 3. [`parse_card`] - walk one body, decode values and fold repeated fields
//! 4. [`parse_report`] / [`parse_vcf`] - run every card, skipping bad ones
//!
//! Field tie-breaks live in [`policy`] so each rule can be tested on its own.

mod card;
mod decode;
mod error;
mod name;
mod parser;
pub mod policy;
mod split;
mod validate;

pub use card::parse_card;
pub use decode::decode_value;
pub use error::{CardSkip, SkippedCard};
pub use name::{UNKNOWN_CONTACT, resolve_name};
pub use parser::{ParseReport, parse_report, parse_vcf};
pub use split::split_cards;
pub use validate::validate_content;
