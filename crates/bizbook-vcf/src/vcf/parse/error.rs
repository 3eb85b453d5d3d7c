//! Per-card skip reasons.

use thiserror::Error;

/// Why a single card produced no contact.
///
/// These never fail the file; the card is dropped and parsing continues.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSkip {
    #[error("card has no KEY:VALUE lines")]
    NoContentLines,

    #[error("card has no name, phone or email")]
    NoIdentity,
}

/// A card that was dropped, by its position among the split cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedCard {
    /// Zero-based index into the cards returned by the splitter.
    pub index: usize,
    pub reason: CardSkip,
}

impl std::fmt::Display for SkippedCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card {}: {}", self.index, self.reason)
    }
}
