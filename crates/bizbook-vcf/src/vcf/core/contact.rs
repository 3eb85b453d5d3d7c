//! The flat contact record produced by the importer.

use serde::{Deserialize, Serialize};

/// One imported contact.
///
/// `name` is never empty. Every other field holds at most one value chosen
/// by the field policies in [`crate::vcf::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedContact {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl ParsedContact {
    /// Creates a contact with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns whether the record carries a name, a phone or an email.
    ///
    /// Records failing this are not emitted.
    #[must_use]
    pub fn has_identity(&self) -> bool {
        !self.name.is_empty() || self.phone.is_some() || self.email.is_some()
    }
}
