//! Whole-file orchestration.

use super::card::parse_card;
use super::error::SkippedCard;
use super::split::split_cards;
use crate::error::{VcfError, VcfResult};
use crate::vcf::core::ParsedContact;

/// Outcome of parsing one VCF file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Contacts in the order their cards appeared.
    pub contacts: Vec<ParsedContact>,
    /// Cards that produced no contact.
    pub skipped: Vec<SkippedCard>,
}

impl ParseReport {
    /// Number of candidate cards the splitter produced.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.contacts.len() + self.skipped.len()
    }
}

/// Parses VCF text into contacts, reporting skipped cards.
///
/// ## Summary
/// Splits the text into cards and extracts each one. A card that fails is
/// logged and recorded in [`ParseReport::skipped`]; the rest are unaffected.
/// Callers are expected to run [`validate_content`](super::validate_content)
/// first.
///
/// ## Errors
/// - `VcfError::InvalidInput` if `text` is empty
/// - `VcfError::NoCards` if no card with an `FN:` line is found
/// - `VcfError::NoContacts` if every card was skipped
#[tracing::instrument(skip(text), fields(input_len = text.len()))]
pub fn parse_report(text: &str) -> VcfResult<ParseReport> {
    if text.is_empty() {
        return Err(VcfError::InvalidInput);
    }

    let cards = split_cards(text).inspect_err(|_| {
        tracing::warn!("No vCards found in document");
    })?;

    tracing::debug!(count = cards.len(), "Parsing vCards");

    let mut report = ParseReport::default();
    for (index, card) in cards.into_iter().enumerate() {
        match parse_card(card) {
            Ok(contact) => report.contacts.push(contact),
            Err(reason) => {
                tracing::warn!(index, reason = %reason, "Skipping malformed vCard");
                report.skipped.push(SkippedCard { index, reason });
            }
        }
    }

    if report.contacts.is_empty() {
        return Err(VcfError::NoContacts);
    }

    tracing::debug!(
        parsed = report.contacts.len(),
        skipped = report.skipped.len(),
        "Parsed vCards"
    );

    Ok(report)
}

/// Parses VCF text into contacts.
///
/// ## Errors
/// Same as [`parse_report`].
pub fn parse_vcf(text: &str) -> VcfResult<Vec<ParsedContact>> {
    parse_report(text).map(|report| report.contacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcf::parse::CardSkip;

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(parse_vcf(""), Err(VcfError::InvalidInput));
    }

    #[test]
    fn whitespace_input_has_no_cards() {
        assert_eq!(parse_vcf("  \n "), Err(VcfError::NoCards));
    }

    #[test]
    fn report_counts_cards() {
        let text = "BEGIN:VCARD\nFN:A\nEND:VCARD\nBEGIN:VCARD\nFN:B\nEND:VCARD\n";
        let report = parse_report(text).unwrap();
        assert_eq!(report.card_count(), 2);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn skipped_cards_count_towards_cards() {
        let report = ParseReport {
            contacts: vec![ParsedContact::named("A")],
            skipped: vec![SkippedCard {
                index: 1,
                reason: CardSkip::NoContentLines,
            }],
        };
        assert_eq!(report.card_count(), 2);
        assert_eq!(report.skipped[0].to_string(), "card 1: card has no KEY:VALUE lines");
    }
}
