//! Core vCard import types.

mod contact;
mod field;

pub use contact::ParsedContact;
pub use field::{FIELD_PREFIXES, FieldKind, strip_group};
