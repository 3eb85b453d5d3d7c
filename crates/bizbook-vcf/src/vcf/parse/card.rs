//! Single-card field extraction.

use super::decode::decode_value;
use super::error::CardSkip;
use super::name::resolve_name;
use super::policy::{Candidate, best_address, best_email, best_phone, latest_note};
use crate::vcf::core::{FieldKind, ParsedContact};

/// Extracts one contact from a card body (the text between the delimiters).
///
/// Lines without a colon and unknown properties are ignored.
///
/// ## Errors
/// Returns a [`CardSkip`] when the body has no `KEY:VALUE` line or the
/// assembled record has no name, phone or email.
pub fn parse_card(body: &str) -> Result<ParsedContact, CardSkip> {
    let mut fields = CardFields::default();
    let mut content_lines = 0_usize;

    for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let Some((key, raw)) = line.split_once(':') else {
            continue;
        };
        content_lines += 1;

        let key = key.to_ascii_uppercase();
        let Some(kind) = FieldKind::from_key(&key) else {
            tracing::trace!(key = %key, "Ignoring property");
            continue;
        };

        fields.accept(kind, &key, decode_value(raw.trim()));
    }

    if content_lines == 0 {
        return Err(CardSkip::NoContentLines);
    }

    let contact = fields.finish();
    if !contact.has_identity() {
        return Err(CardSkip::NoIdentity);
    }

    Ok(contact)
}

/// Per-card accumulator.
#[derive(Debug, Default)]
struct CardFields {
    formatted_name: String,
    structured_name: String,
    phone: Option<Candidate>,
    email: Option<Candidate>,
    address: Option<String>,
    note: Option<String>,
}

impl CardFields {
    fn accept(&mut self, kind: FieldKind, key: &str, value: String) {
        match kind {
            FieldKind::FormattedName => self.formatted_name = value,
            FieldKind::StructuredName => self.structured_name = value,
            FieldKind::Note => self.note = latest_note(value),
            FieldKind::Email => {
                self.email = Some(best_email(self.email.take(), Candidate::email(key, value)));
            }
            // Empty values never displace a held phone or address
            _ if value.is_empty() => {}
            FieldKind::Phone => {
                self.phone = Some(best_phone(self.phone.take(), Candidate::phone(key, value)));
            }
            FieldKind::Address => {
                self.address = Some(best_address(self.address.take(), value));
            }
        }
    }

    fn finish(self) -> ParsedContact {
        ParsedContact {
            name: resolve_name(&self.formatted_name, &self.structured_name),
            phone: self.phone.map(|held| held.value),
            email: self
                .email
                .map(|held| held.value)
                .filter(|value| !value.is_empty()),
            address: self.address,
            notes: self.note,
        }
    }
}
