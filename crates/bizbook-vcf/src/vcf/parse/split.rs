//! Card splitting.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{VcfError, VcfResult};

/// A `BEGIN:VCARD` or `END:VCARD` delimiter plus its line break.
/// `END:VCARD` may also close the input without a trailing newline.
#[expect(clippy::expect_used, reason = "static pattern is known to compile")]
static CARD_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)BEGIN:VCARD\s*\n|END:VCARD\s*(?:\n|\z)")
        .expect("card delimiter pattern should compile")
});

/// Marks a fragment as a real card rather than preamble or junk.
const FORMATTED_NAME_LINE: &str = "FN:";

/// Splits `text` into trimmed card bodies.
///
/// Fragments that are blank or have no line starting with `FN:` are dropped.
///
/// ## Errors
/// Returns `VcfError::NoCards` if no fragment survives.
pub fn split_cards(text: &str) -> VcfResult<Vec<&str>> {
    let cards: Vec<&str> = CARD_DELIMITER
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .filter(|fragment| has_formatted_name(fragment))
        .map(str::trim)
        .collect();

    tracing::trace!(count = cards.len(), "Split card bodies");

    if cards.is_empty() {
        return Err(VcfError::NoCards);
    }

    Ok(cards)
}

fn has_formatted_name(fragment: &str) -> bool {
    fragment
        .lines()
        .any(|line| line.trim_start().starts_with(FORMATTED_NAME_LINE))
}
